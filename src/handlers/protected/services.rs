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
use crate::models::{Service, ServiceDraft, ServicePatch};
use crate::state::AppState;

/// POST /api/services
pub async fn create(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<Service>), ApiError> {
    require_admin(&current)?;
    let draft: ServiceDraft =
        serde_json::from_value(body).map_err(|e| ApiError::invalid_json(e.to_string()))?;
    let new = draft.validate()?;

    let service = state.store.services.insert_with(|id| Service {
        id,
        title: new.title,
        description: new.description,
        icon: new.icon,
        features: new.features,
        created_at: Utc::now(),
    });

    Ok((StatusCode::CREATED, Json(service)))
}

/// PUT /api/services/:id
pub async fn update(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<i32>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<Service>, ApiError> {
    require_admin(&current)?;
    let patch: ServicePatch =
        serde_json::from_value(body).map_err(|e| ApiError::invalid_json(e.to_string()))?;
    patch.validate()?;

    state
        .store
        .services
        .update_with(id, |service| patch.apply(service))
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Service not found"))
}

/// DELETE /api/services/:id
pub async fn remove(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    require_admin(&current)?;
    if state.store.services.remove(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("Service not found"))
    }
}
