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
use crate::models::{JobOpening, JobOpeningDraft, JobOpeningPatch};
use crate::state::AppState;

/// GET /api/jobs/all - every opening, inactive ones included
pub async fn list_all(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Json<Vec<JobOpening>>, ApiError> {
    require_admin(&current)?;
    Ok(Json(state.store.job_openings.all()))
}

/// POST /api/jobs
pub async fn create(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<JobOpening>), ApiError> {
    require_admin(&current)?;
    let draft: JobOpeningDraft =
        serde_json::from_value(body).map_err(|e| ApiError::invalid_json(e.to_string()))?;
    let new = draft.validate()?;

    let job = state.store.job_openings.insert_with(|id| JobOpening {
        id,
        title: new.title,
        location: new.location,
        job_type: new.job_type,
        salary: new.salary,
        description: new.description,
        active: new.active,
        created_at: Utc::now(),
    });

    Ok((StatusCode::CREATED, Json(job)))
}

/// PUT /api/jobs/:id
pub async fn update(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<i32>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<JobOpening>, ApiError> {
    require_admin(&current)?;
    let patch: JobOpeningPatch =
        serde_json::from_value(body).map_err(|e| ApiError::invalid_json(e.to_string()))?;
    patch.validate()?;

    state
        .store
        .job_openings
        .update_with(id, |job| patch.apply(job))
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Job not found"))
}

/// DELETE /api/jobs/:id
///
/// Applications referencing this opening keep their jobId; the reference is
/// soft and is not cleaned up.
pub async fn remove(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    require_admin(&current)?;
    if state.store.job_openings.remove(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("Job not found"))
    }
}
