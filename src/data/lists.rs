//! Growable string lists backing list-mode views.

use std::sync::{PoisonError, RwLock};

use tracing::{debug, warn};

use crate::select2::{CreateHook, ListSource};

/// Longest value accepted by [`MemoryList::add`], in characters.
pub const MAX_VALUE_LEN: usize = 64;

/// An ordered, de-duplicated (case-insensitively) list of values.
#[derive(Debug, Default)]
pub struct MemoryList {
    values: RwLock<Vec<String>>,
}

impl MemoryList {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = Self::default();
        for value in values {
            let value: String = value.into();
            if list.add(&value).is_none() {
                warn!(seed = %value, "skipping seed list value");
            }
        }
        list
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Append `value` unless an equal one (ignoring case) is present.
    ///
    /// Returns the stored spelling, or `None` for blank or oversized values.
    pub fn add(&self, value: &str) -> Option<String> {
        let value = value.trim();
        if value.is_empty() || value.chars().count() > MAX_VALUE_LEN {
            return None;
        }

        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        let lowered = value.to_lowercase();
        if let Some(existing) = values.iter().find(|v| v.to_lowercase() == lowered) {
            return Some(existing.clone());
        }
        values.push(value.to_owned());
        debug!(value, len = values.len(), "value appended to list");
        Some(value.to_owned())
    }
}

impl ListSource for MemoryList {
    fn list(&self) -> Vec<String> {
        self.snapshot()
    }
}

impl CreateHook for MemoryList {
    fn create(&self, text: &str) -> Option<String> {
        self.add(text)
    }
}
