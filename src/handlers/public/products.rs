use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::error::ApiError;
use crate::models::Product;
use crate::state::AppState;

/// GET /api/products
pub async fn list(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.store.products.all())
}

/// GET /api/products/featured - products flagged popular
pub async fn featured(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.store.popular_products())
}

/// GET /api/products/category/:category
pub async fn by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Json<Vec<Product>> {
    Json(state.store.products_by_category(&category))
}

/// GET /api/products/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>, ApiError> {
    state
        .store
        .products
        .get(id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Product not found"))
}
