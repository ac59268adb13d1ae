//! Select2 result shaping.
//!
//! Two kinds of views are provided. [`QuerySetView`] searches a record source,
//! paginates, and offers a translated "create" option to requesters allowed to
//! add records. [`ListView`] filters a plain list of strings and hands new
//! values to an optional create hook.

pub mod create;
pub mod error;
pub mod format;
pub mod i18n;
pub mod list;
pub mod page;
pub mod queryset;
pub mod response;

pub use error::{AutocompleteError, CreateError, PermissionError};
pub use format::{Extract, Natural, ResultItem, WithFns};
pub use i18n::{Catalog, Translate, Untranslated};
pub use list::{CreateHook, ListSource, ListView};
pub use page::{Page, PageError, PageInfo, Paginator};
pub use queryset::{AddPermission, PageContext, QuerySetView, QuerySource, Requester};
pub use response::{CreatedResponse, ListResponse, Pagination, Select2Response, Select2Result};
