//! Decides whether a "create new value" entry is offered.

use crate::select2::error::PermissionError;
use crate::select2::i18n::{CREATE_MESSAGE, Translate, interpolate};
use crate::select2::page::PageInfo;
use crate::select2::response::Select2Result;

/// Create option for queryset-backed views.
///
/// Offered only when creation is enabled, `q` is non-empty, the request is for
/// the first page (or the view does not paginate) and the requester may add
/// objects. `has_add_permission` is not called unless the first three hold; an
/// error from it is returned as-is.
pub fn queryset_create_option<F>(
    create_enabled: bool,
    q: Option<&str>,
    page: Option<PageInfo>,
    has_add_permission: F,
    translator: &dyn Translate,
) -> Result<Option<Select2Result>, PermissionError>
where
    F: FnOnce() -> Result<bool, PermissionError>,
{
    let Some(q) = q.filter(|q| !q.is_empty()) else {
        return Ok(None);
    };
    if !create_enabled {
        return Ok(None);
    }
    if page.is_some_and(|p| p.number != 1) {
        return Ok(None);
    }
    if !has_add_permission()? {
        return Ok(None);
    }

    let text = interpolate(&translator.gettext(CREATE_MESSAGE), &[("new_value", q)]);
    Ok(Some(Select2Result::create_option(q, text)))
}

/// Create option for list-backed views. The label is never translated.
pub fn list_create_option(has_create_hook: bool, q: Option<&str>) -> Option<Select2Result> {
    let q = q.filter(|q| !q.is_empty())?;
    has_create_hook.then(|| Select2Result::create_option(q, format!("Create \"{q}\"")))
}
