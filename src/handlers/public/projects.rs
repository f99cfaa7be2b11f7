// Public project reads; there is no visibility flag on projects.
use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::error::ApiError;
use crate::models::Project;
use crate::state::AppState;

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> Json<Vec<Project>> {
    Json(state.store.projects.all())
}

/// GET /api/projects/featured
pub async fn featured(State(state): State<AppState>) -> Json<Vec<Project>> {
    Json(state.store.featured_projects())
}

/// GET /api/projects/category/:category - exact string match
pub async fn by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Json<Vec<Project>> {
    Json(state.store.projects_by_category(&category))
}

/// GET /api/projects/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Project>, ApiError> {
    state
        .store
        .projects
        .get(id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Project not found"))
}
