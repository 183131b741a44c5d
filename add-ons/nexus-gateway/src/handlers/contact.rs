//! Contact card route. The relay's failure detail stays in the logs; the
//! visitor sees one generic message either way.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use nexus_core::ContactSubmission;
use serde_json::json;

use super::{api_error, ApiError};
use crate::AppState;

/// POST /api/v1/contact – relay a submission to the form service.
pub(crate) async fn submit(
    State(state): State<AppState>,
    Json(submission): Json<ContactSubmission>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.contact.send(&submission).await.map_err(|_| {
        api_error(StatusCode::BAD_GATEWAY, "Message transmission failed.")
    })?;
    Ok(Json(json!({ "status": "sent" })))
}
