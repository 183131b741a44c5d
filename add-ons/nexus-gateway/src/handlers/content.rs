//! Read-only display views: health, profile, projects, skills matrix, and
//! the experience timeline.

use axum::extract::State;
use axum::Json;
use nexus_core::content::{Experience, Project, SkillCategory};
use nexus_core::{profile, Profile, CONTENT_VERSION};
use serde_json::json;

use super::{store_handle, ApiError};
use crate::AppState;

/// GET /api/v1/health – liveness check.
pub(crate) async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "app": state.config.app_name.clone(),
        "content_version": CONTENT_VERSION,
    }))
}

/// GET /api/v1/profile – static developer profile (hero/about views).
pub(crate) async fn get_profile() -> Json<Profile> {
    Json(profile().clone())
}

/// GET /api/v1/projects – the project catalog, newest first.
pub(crate) async fn list_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<Project>>, ApiError> {
    let store = store_handle(&state)?;
    Ok(Json(store.projects()))
}

/// GET /api/v1/skills – the skills matrix, grouped per category in display
/// order.
pub(crate) async fn list_skills(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let store = store_handle(&state)?;
    let skills = store.skills();
    let categories: Vec<serde_json::Value> = SkillCategory::ALL
        .iter()
        .map(|category| {
            let rows: Vec<_> = skills.iter().filter(|s| s.category == *category).collect();
            json!({ "category": category.label(), "skills": rows })
        })
        .collect();
    Ok(Json(json!({ "categories": categories })))
}

/// GET /api/v1/experience – the read-only experience timeline.
pub(crate) async fn list_experience(
    State(state): State<AppState>,
) -> Result<Json<Vec<Experience>>, ApiError> {
    let store = store_handle(&state)?;
    Ok(Json(store.experience()))
}
