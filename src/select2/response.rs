//! Wire types for the Select2 `ajax` transport.
//!
//! Field names are fixed by the client library, so none of these structs use
//! `rename_all`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One option in the dropdown.
///
/// `create_id` is only emitted on the synthetic "create new value" entry; the
/// widget uses it to tell a proposed value apart from an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Select2Result {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub create_id: Option<bool>,
}

impl Select2Result {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            create_id: None,
        }
    }

    /// The synthetic entry offering to create `value`.
    pub fn create_option(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: value.into(),
            text: text.into(),
            create_id: Some(true),
        }
    }

    pub fn is_create_option(&self) -> bool {
        self.create_id == Some(true)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Pagination {
    pub more: bool,
}

/// Envelope for queryset-backed views. `pagination.more` is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Select2Response {
    pub results: Vec<Select2Result>,
    pub pagination: Pagination,
}

/// Envelope for list-backed views, which never paginate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ListResponse {
    pub results: Vec<Select2Result>,
}

/// Body returned after a value has been created through a POST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreatedResponse {
    pub id: String,
    pub text: String,
}
