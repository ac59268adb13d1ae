//! Error types for the autocomplete views.

use crate::select2::page::PageError;

/// Raised by a permission hook that could not (or refused to) evaluate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PermissionError {
    #[error("user {0:?} is blocked")]
    Blocked(String),
    #[error("permission check failed: {0}")]
    Failed(String),
}

/// Why a backing store refused to create a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateError {
    #[error("no field named {0:?}")]
    UnknownField(String),
    #[error("value rejected: {0}")]
    Rejected(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum AutocompleteError {
    /// The view was asked to create a value but has no way to do so. This is a
    /// deployment mistake, not something the client can fix.
    #[error("view is improperly configured: {0}")]
    ImproperlyConfigured(String),
    /// The request cannot be served as sent; answered with an empty 400.
    #[error("bad request: {0}")]
    BadRequest(&'static str),
    /// The requester may not create values.
    #[error("permission denied")]
    PermissionDenied,
    #[error(transparent)]
    Permission(#[from] PermissionError),
    #[error(transparent)]
    Page(#[from] PageError),
}

impl From<CreateError> for AutocompleteError {
    fn from(err: CreateError) -> Self {
        match err {
            CreateError::UnknownField(field) => {
                Self::ImproperlyConfigured(format!("create field {field:?} does not exist"))
            }
            CreateError::Rejected(reason) => Self::BadRequest(reason),
        }
    }
}
