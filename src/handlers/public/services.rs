use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::error::ApiError;
use crate::models::Service;
use crate::state::AppState;

/// GET /api/services
pub async fn list(State(state): State<AppState>) -> Json<Vec<Service>> {
    Json(state.store.services.all())
}

/// GET /api/services/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Service>, ApiError> {
    state
        .store
        .services
        .get(id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Service not found"))
}
