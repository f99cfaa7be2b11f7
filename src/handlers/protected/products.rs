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
use crate::models::{Product, ProductDraft, ProductPatch};
use crate::state::AppState;

/// POST /api/products
pub async fn create(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    require_admin(&current)?;
    let draft: ProductDraft =
        serde_json::from_value(body).map_err(|e| ApiError::invalid_json(e.to_string()))?;
    let new = draft.validate()?;

    let product = state.store.products.insert_with(|id| Product {
        id,
        name: new.name,
        description: new.description,
        category: new.category,
        price: new.price,
        features: new.features,
        image_url: new.image_url,
        is_popular: new.is_popular,
        created_at: Utc::now(),
    });

    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/products/:id
pub async fn update(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<i32>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<Product>, ApiError> {
    require_admin(&current)?;
    let patch: ProductPatch =
        serde_json::from_value(body).map_err(|e| ApiError::invalid_json(e.to_string()))?;
    patch.validate()?;

    state
        .store
        .products
        .update_with(id, |product| patch.apply(product))
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Product not found"))
}

/// DELETE /api/products/:id
pub async fn remove(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    require_admin(&current)?;
    if state.store.products.remove(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("Product not found"))
    }
}
