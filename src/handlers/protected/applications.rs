// Application records contain applicant PII, so every read here is gated.
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    Extension,
};

use crate::auth::CurrentUser;
use crate::error::ApiError;
use crate::handlers::require_admin;
use crate::models::JobApplication;
use crate::state::AppState;

/// GET /api/applications
pub async fn list(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Json<Vec<JobApplication>>, ApiError> {
    require_admin(&current)?;
    Ok(Json(state.store.job_applications.all()))
}

/// GET /api/applications/:id
pub async fn get(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> Result<Json<JobApplication>, ApiError> {
    require_admin(&current)?;
    state
        .store
        .job_applications
        .get(id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Application not found"))
}

/// GET /api/applications/job/:job_id
pub async fn by_job(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(job_id): Path<i32>,
) -> Result<Json<Vec<JobApplication>>, ApiError> {
    require_admin(&current)?;
    Ok(Json(state.store.applications_for_job(job_id)))
}

/// DELETE /api/applications/:id
pub async fn remove(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    require_admin(&current)?;
    if state.store.job_applications.remove(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("Application not found"))
    }
}
