//! In-memory data backing the bundled autocomplete views.

pub mod lists;
pub mod permissions;
pub mod tags;
