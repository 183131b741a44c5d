//! Gated admin routes. Unlock issues a session token that dies with the
//! process, the page-reload analog of the original gate. No rate limiting,
//! no lockout: the gate is a novelty, not access control.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use nexus_core::content::{Skill, SkillCategory};
use nexus_core::{AdminPanel, ProjectDraft, ResetToken};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use super::{api_error, ApiError};
use crate::AppState;

/// Header carrying the admin session token.
pub(crate) const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

#[derive(Deserialize)]
pub(crate) struct UnlockRequest {
    passphrase: String,
}

#[derive(Deserialize)]
pub(crate) struct SkillUpdate {
    name: String,
    level: u8,
    category: SkillCategory,
}

#[derive(Deserialize)]
pub(crate) struct ResetConfirmRequest {
    token: String,
}

fn require_panel(state: &AppState, headers: &HeaderMap) -> Result<Arc<AdminPanel>, ApiError> {
    headers
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|token| state.admin_sessions.get(token).map(|e| Arc::clone(e.value())))
        .ok_or_else(|| api_error(StatusCode::UNAUTHORIZED, "admin session required"))
}

/// POST /api/v1/admin/unlock – shared-secret check. A match issues the
/// session token; a miss mutates nothing.
pub(crate) async fn unlock(
    State(state): State<AppState>,
    Json(req): Json<UnlockRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let store = super::store_handle(&state)?;
    match state.gate.unlock(&req.passphrase, store) {
        Some(panel) => {
            let token = Uuid::new_v4().to_string();
            state.admin_sessions.insert(token.clone(), Arc::new(panel));
            Ok(Json(json!({ "token": token })))
        }
        None => Err(api_error(
            StatusCode::UNAUTHORIZED,
            "Access Denied: Invalid Credentials",
        )),
    }
}

/// POST /api/v1/admin/projects – create from a draft; the id is generated
/// server-side.
pub(crate) async fn create_project(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(draft): Json<ProjectDraft>,
) -> Result<Json<nexus_core::Project>, ApiError> {
    let panel = require_panel(&state, &headers)?;
    Ok(Json(panel.create_project(draft)))
}

/// PUT /api/v1/admin/projects/:id – rebuild the record under its id.
pub(crate) async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(draft): Json<ProjectDraft>,
) -> Result<Json<nexus_core::Project>, ApiError> {
    let panel = require_panel(&state, &headers)?;
    Ok(Json(panel.edit_project(&id, draft)))
}

/// DELETE /api/v1/admin/projects/:id – immediate, no confirmation.
pub(crate) async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, ApiError> {
    let panel = require_panel(&state, &headers)?;
    panel.remove_project(&id);
    Ok(Json(json!({ "status": "deleted" })))
}

/// POST /api/v1/admin/skills – append the fixed placeholder skill for
/// editing in place.
pub(crate) async fn add_skill(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Skill>, ApiError> {
    let panel = require_panel(&state, &headers)?;
    Ok(Json(panel.add_placeholder_skill()))
}

/// PUT /api/v1/admin/skills/:id – replace name, level, and category.
pub(crate) async fn update_skill(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(update): Json<SkillUpdate>,
) -> Result<Json<Skill>, ApiError> {
    let panel = require_panel(&state, &headers)?;
    let skill = Skill {
        id,
        name: update.name,
        level: update.level,
        category: update.category,
    };
    panel.edit_skill(skill.clone());
    Ok(Json(skill))
}

/// DELETE /api/v1/admin/skills/:id – immediate, no confirmation.
pub(crate) async fn delete_skill(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, ApiError> {
    let panel = require_panel(&state, &headers)?;
    panel.remove_skill(&id);
    Ok(Json(json!({ "status": "deleted" })))
}

/// POST /api/v1/admin/reset – first half of the destructive reset: issue
/// the confirmation token.
pub(crate) async fn request_reset(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, ApiError> {
    let panel = require_panel(&state, &headers)?;
    Ok(Json(json!({ "token": panel.request_reset().to_string() })))
}

/// POST /api/v1/admin/reset/confirm – second half: reset to compiled
/// defaults when the token is the one most recently issued.
pub(crate) async fn confirm_reset(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<ResetConfirmRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let panel = require_panel(&state, &headers)?;
    let token = ResetToken::parse(&req.token)
        .ok_or_else(|| api_error(StatusCode::CONFLICT, "reset token invalid"))?;
    panel
        .confirm_reset(&token)
        .map_err(|_| api_error(StatusCode::CONFLICT, "reset token invalid"))?;
    Ok(Json(json!({ "status": "reset" })))
}
