// Admin-gated project mutations.
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    Extension,
};
use chrono::Utc;

use crate::auth::CurrentUser;
use crate::error::ApiError;
use crate::handlers::require_admin;
use crate::models::{Project, ProjectDraft, ProjectPatch};
use crate::state::AppState;

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    require_admin(&current)?;
    let draft: ProjectDraft =
        serde_json::from_value(body).map_err(|e| ApiError::invalid_json(e.to_string()))?;
    let new = draft.validate()?;

    let project = state.store.projects.insert_with(|id| Project {
        id,
        title: new.title,
        description: new.description,
        category: new.category,
        client: new.client,
        image_url: new.image_url,
        featured: new.featured,
        created_at: Utc::now(),
    });

    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/projects/:id - partial merge; omitted fields stay untouched
pub async fn update(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<i32>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<Project>, ApiError> {
    require_admin(&current)?;
    let patch: ProjectPatch =
        serde_json::from_value(body).map_err(|e| ApiError::invalid_json(e.to_string()))?;
    patch.validate()?;

    state
        .store
        .projects
        .update_with(id, |project| patch.apply(project))
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Project not found"))
}

/// DELETE /api/projects/:id
pub async fn remove(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    require_admin(&current)?;
    if state.store.projects.remove(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("Project not found"))
    }
}
