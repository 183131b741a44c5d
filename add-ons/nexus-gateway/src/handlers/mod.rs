//! Route handlers, grouped by feature. Failures stay contained to their
//! feature: every error response carries a generic message and the detail
//! goes to tracing only.

pub(crate) mod admin;
pub(crate) mod chat;
pub(crate) mod contact;
pub(crate) mod content;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::Json;
use nexus_core::ContentStore;

use crate::AppState;

/// Standard error shape for handler short-circuits.
pub(crate) type ApiError = (StatusCode, Json<serde_json::Value>);

pub(crate) fn api_error(status: StatusCode, message: &str) -> ApiError {
    (status, Json(serde_json::json!({ "error": message })))
}

/// Store handle for this request. Only fails once the provider has shut
/// down, which means the process is already on its way out.
pub(crate) fn store_handle(state: &AppState) -> Result<Arc<ContentStore>, ApiError> {
    state.provider.store().map_err(|e| {
        tracing::warn!(error = %e, "store requested outside provider lifetime");
        api_error(StatusCode::SERVICE_UNAVAILABLE, "content store offline")
    })
}
