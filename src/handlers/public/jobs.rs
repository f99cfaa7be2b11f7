use axum::{
    extract::{Path, State},
    response::Json,
    Extension,
};

use crate::auth::CurrentUser;
use crate::error::ApiError;
use crate::handlers::require_admin;
use crate::models::JobOpening;
use crate::state::AppState;

/// GET /api/jobs - active openings only
pub async fn list_active(State(state): State<AppState>) -> Json<Vec<JobOpening>> {
    Json(state.store.active_job_openings())
}

/// GET /api/jobs/:id
///
/// An inactive opening is reported as not found to non-admin callers;
/// visibility and existence are deliberately indistinguishable here.
pub async fn get(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> Result<Json<JobOpening>, ApiError> {
    let job = state
        .store
        .job_openings
        .get(id)
        .ok_or_else(|| ApiError::not_found("Job not found"))?;

    if !job.active && require_admin(&current).is_err() {
        return Err(ApiError::not_found("Job not found"));
    }

    Ok(Json(job))
}
