//! Health and status handlers.

use axum::extract::State;
use axum::response::Json;
use serde::Serialize;
use serde_json::{Value, json};
use std::collections::BTreeMap;
use tracing::trace;
use ts_rs::TS;

use crate::state::AppState;

#[derive(Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StatusResponse {
    version: String,
    commit: String,
    tag_count: usize,
    /// List name → number of values currently offered.
    lists: BTreeMap<String, usize>,
}

/// `GET /api/health`
pub(super) async fn health() -> Json<Value> {
    trace!("health check requested");
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// `GET /api/status`
pub(super) async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let lists = state
        .lists
        .iter()
        .map(|(name, view)| (name.clone(), view.get(None).results.len()))
        .collect();

    Json(StatusResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        commit: env!("GIT_COMMIT_HASH").to_string(),
        tag_count: state.tags.source().len(),
        lists,
    })
}
