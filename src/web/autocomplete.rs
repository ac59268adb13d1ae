//! Select2 autocomplete handlers.

use std::convert::Infallible;
use std::time::{Duration, Instant};

use axum::Json;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, FromRequestParts, Path, Query, State};
use axum::http::HeaderMap;
use axum::http::header::ACCEPT_LANGUAGE;
use axum::http::request::Parts;
use serde::Deserialize;

use crate::select2::{CreatedResponse, ListResponse, ListView, Requester, Select2Response};
use crate::state::AppState;
use crate::utils::log_if_slow;
use crate::web::error::ApiError;

/// Header carrying the requester's user name.
pub const USER_HEADER: &str = "x-user";

const SLOW_THRESHOLD: Duration = Duration::from_millis(50);

#[derive(Debug, Default, Deserialize)]
pub struct AutocompleteParams {
    pub q: Option<String>,
    pub page: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateForm {
    pub text: Option<String>,
}

impl<S: Send + Sync> FromRequestParts<S> for Requester {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .headers
            .get(USER_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(String::from);
        Ok(Requester { user })
    }
}

/// `text` from a form body. A body that is not a form counts as no text.
fn form_text(form: Result<Form<CreateForm>, FormRejection>) -> Option<String> {
    match form {
        Ok(Form(form)) => form.text,
        Err(e) => {
            tracing::debug!(error = %e, "unreadable create form");
            None
        }
    }
}

fn list_view<'a>(state: &'a AppState, name: &str) -> Result<&'a ListView, ApiError> {
    state
        .lists
        .get(name)
        .ok_or_else(|| ApiError::not_found(format!("No list named '{name}'")))
}

/// `GET /api/tags/autocomplete?q={query}&page={n}`
pub(super) async fn tags_autocomplete(
    State(state): State<AppState>,
    Query(params): Query<AutocompleteParams>,
    requester: Requester,
    headers: HeaderMap,
) -> Result<Json<Select2Response>, ApiError> {
    let start = Instant::now();
    let accept_language = headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok());
    let locale = state.catalog.negotiate(accept_language);

    let response = state.tags.get(
        params.q.as_deref(),
        params.page.as_deref(),
        &requester,
        &locale,
    )?;
    log_if_slow(start, SLOW_THRESHOLD, "tags autocomplete");
    Ok(Json(response))
}

/// `POST /api/tags/autocomplete` with form field `text`
pub(super) async fn create_tag(
    State(state): State<AppState>,
    requester: Requester,
    form: Result<Form<CreateForm>, FormRejection>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let text = form_text(form);
    let created = state.tags.post(text.as_deref(), &requester)?;
    tracing::info!(id = %created.id, text = %created.text, user = ?requester.user, "tag created");
    Ok(Json(created))
}

/// `GET /api/lists/{name}/autocomplete?q={query}`
pub(super) async fn list_autocomplete(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<AutocompleteParams>,
) -> Result<Json<ListResponse>, ApiError> {
    let start = Instant::now();
    let view = list_view(&state, &name)?;
    let response = view.get(params.q.as_deref());
    log_if_slow(start, SLOW_THRESHOLD, "list autocomplete");
    Ok(Json(response))
}

/// `POST /api/lists/{name}/autocomplete` with form field `text`
pub(super) async fn create_list_value(
    State(state): State<AppState>,
    Path(name): Path<String>,
    form: Result<Form<CreateForm>, FormRejection>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let view = list_view(&state, &name)?;
    let text = form_text(form);
    let created = view.post(text.as_deref())?;
    tracing::info!(list = %name, value = %created.id, "list value created");
    Ok(Json(created))
}
