//! In-memory tag records searched by the queryset-backed view.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use tracing::warn;
use serde::Serialize;
use ts_rs::TS;

use crate::select2::{CreateError, QuerySource, ResultItem};

/// Longest tag name accepted, in characters.
pub const MAX_NAME_LEN: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Tag {
    pub id: u64,
    pub name: String,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl ResultItem for Tag {
    fn result_value(&self) -> String {
        self.id.to_string()
    }
}

/// Tags keyed by lowercase name, so lookups and creation are
/// case-insensitive and a name can only exist once.
#[derive(Debug, Default)]
pub struct TagStore {
    by_name: DashMap<String, Tag>,
    next_id: AtomicU64,
}

/// Trim and collapse internal whitespace runs to a single space.
fn normalize(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl TagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `names`; duplicates collapse and rejected
    /// names are skipped with a warning.
    pub fn seeded<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let store = Self::new();
        for name in names {
            let name = name.as_ref();
            if let Err(e) = store.insert(name) {
                warn!(seed = name, error = %e, "skipping seed tag");
            }
        }
        store
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Insert `name`, or return the tag that already has it.
    pub fn insert(&self, name: &str) -> Result<Tag, CreateError> {
        let name = normalize(name);
        if name.is_empty() {
            return Err(CreateError::Rejected("blank name"));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(CreateError::Rejected("name too long"));
        }

        let tag = self
            .by_name
            .entry(name.to_lowercase())
            .or_insert_with(|| Tag {
                id: self.next_id.fetch_add(1, Ordering::Relaxed) + 1,
                name,
            })
            .clone();
        Ok(tag)
    }
}

impl QuerySource for TagStore {
    type Item = Tag;

    fn filter(&self, q: &str) -> Vec<Tag> {
        let needle = q.to_lowercase();
        let mut tags: Vec<Tag> = self
            .by_name
            .iter()
            .filter(|entry| entry.key().contains(&needle))
            .map(|entry| entry.value().clone())
            .collect();
        tags.sort_by_key(|tag| tag.id);
        tags
    }

    fn get_or_create(&self, field: &str, text: &str) -> Result<Tag, CreateError> {
        match field {
            "name" => self.insert(text),
            other => Err(CreateError::UnknownField(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn filter_is_case_insensitive_in_id_order() {
        let store = TagStore::seeded(["Rust", "rustic", "Go", "TRUST"]);
        let names: Vec<String> = store.filter("RUST").into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Rust", "rustic", "TRUST"]);
        assert_eq!(store.filter("").len(), 4);
    }

    #[test]
    fn insert_deduplicates_ignoring_case() {
        let store = TagStore::new();
        let first = store.insert("Rust").unwrap();
        let again = store.insert("  rUST ").unwrap();
        assert_eq!(first, again);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn insert_normalizes_whitespace() {
        let store = TagStore::new();
        assert_eq!(store.insert("  async   rust ").unwrap().name, "async rust");
    }

    #[test]
    fn insert_rejects_blank_and_oversized_names() {
        let store = TagStore::new();
        assert_eq!(store.insert("   "), Err(CreateError::Rejected("blank name")));
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert_eq!(store.insert(&long), Err(CreateError::Rejected("name too long")));
        assert!(store.is_empty());
    }

    #[test]
    #[traced_test]
    fn seeding_warns_about_rejected_names() {
        let store = TagStore::seeded(["rust", "  ", "go"]);
        assert_eq!(store.len(), 2);
        assert!(logs_contain("skipping seed tag"));
        assert!(logs_contain("blank name"));
    }

    #[test]
    fn ids_are_sequential_from_one() {
        let store = TagStore::seeded(["a", "b", "a", "c"]);
        let ids: Vec<u64> = store.filter("").into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn only_the_name_field_is_creatable() {
        let store = TagStore::new();
        assert_eq!(
            store.get_or_create("slug", "x"),
            Err(CreateError::UnknownField("slug".into()))
        );
        assert_eq!(store.get_or_create("name", "x").unwrap().id, 1);
    }
}
