//! HTTP surface: Select2 autocomplete endpoints plus health/status.

pub mod autocomplete;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod status;

pub use routes::*;
