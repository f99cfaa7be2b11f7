use axum::{
    extract::{Path, State},
    response::Json,
    Extension,
};

use crate::auth::CurrentUser;
use crate::error::ApiError;
use crate::handlers::require_admin;
use crate::models::BlogArticle;
use crate::state::AppState;

/// GET /api/blog - published articles only
pub async fn list_published(State(state): State<AppState>) -> Json<Vec<BlogArticle>> {
    Json(state.store.published_articles())
}

/// GET /api/blog/:id
///
/// Drafts are reported as not found to non-admin callers, same as a missing
/// id; the public response never distinguishes the two.
pub async fn get(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> Result<Json<BlogArticle>, ApiError> {
    let article = state
        .store
        .blog_articles
        .get(id)
        .ok_or_else(|| ApiError::not_found("Article not found"))?;

    if !article.published && require_admin(&current).is_err() {
        return Err(ApiError::not_found("Article not found"));
    }

    Ok(Json(article))
}
