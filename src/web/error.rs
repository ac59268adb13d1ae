//! Conversion of handler failures into HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use ts_rs::TS;

use crate::select2::AutocompleteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum ApiErrorCode {
    BadRequest,
    Forbidden,
    NotFound,
    ImproperlyConfigured,
}

impl ApiErrorCode {
    pub fn status(self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::ImproperlyConfigured => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::NotFound, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.code.status();
        // Select2 clients expect rejected input to come back as a bare 400.
        if self.code == ApiErrorCode::BadRequest {
            return status.into_response();
        }
        (status, Json(self)).into_response()
    }
}

impl From<AutocompleteError> for ApiError {
    fn from(err: AutocompleteError) -> Self {
        match err {
            AutocompleteError::ImproperlyConfigured(detail) => {
                tracing::error!(detail = %detail, "autocomplete view is improperly configured");
                Self::new(
                    ApiErrorCode::ImproperlyConfigured,
                    "This endpoint is not configured to create values",
                )
            }
            AutocompleteError::BadRequest(reason) => {
                tracing::debug!(reason, "rejected autocomplete request");
                Self::new(ApiErrorCode::BadRequest, reason)
            }
            AutocompleteError::PermissionDenied => {
                Self::new(ApiErrorCode::Forbidden, "Permission denied")
            }
            AutocompleteError::Permission(e) => {
                tracing::info!(error = %e, "permission check failed");
                Self::new(ApiErrorCode::Forbidden, "Permission denied")
            }
            AutocompleteError::Page(e) => Self::not_found(e.to_string()),
        }
    }
}
