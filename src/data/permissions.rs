//! Who may add records through the autocomplete views.

use std::collections::HashSet;

use crate::select2::{AddPermission, PermissionError, Requester};

/// Name-based policy: editors may add, blocked users fail the check outright,
/// everyone else (anonymous included) may only search.
#[derive(Debug, Clone, Default)]
pub struct PermissionPolicy {
    editors: HashSet<String>,
    blocked: HashSet<String>,
}

impl PermissionPolicy {
    pub fn new<I, J>(editors: I, blocked: J) -> Self
    where
        I: IntoIterator<Item = String>,
        J: IntoIterator<Item = String>,
    {
        Self {
            editors: editors.into_iter().collect(),
            blocked: blocked.into_iter().collect(),
        }
    }
}

impl AddPermission for PermissionPolicy {
    fn has_add_permission(&self, requester: &Requester) -> Result<bool, PermissionError> {
        let Some(user) = requester.user.as_deref() else {
            return Ok(false);
        };
        if self.blocked.contains(user) {
            return Err(PermissionError::Blocked(user.to_owned()));
        }
        Ok(self.editors.contains(user))
    }
}
