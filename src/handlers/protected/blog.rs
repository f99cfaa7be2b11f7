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
use crate::models::{BlogArticle, BlogArticleDraft, BlogArticlePatch};
use crate::state::AppState;

/// GET /api/blog/all - every article, drafts included
pub async fn list_all(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Json<Vec<BlogArticle>>, ApiError> {
    require_admin(&current)?;
    Ok(Json(state.store.blog_articles.all()))
}

/// POST /api/blog
pub async fn create(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<BlogArticle>), ApiError> {
    require_admin(&current)?;
    let draft: BlogArticleDraft =
        serde_json::from_value(body).map_err(|e| ApiError::invalid_json(e.to_string()))?;
    let new = draft.validate()?;

    let article = state.store.blog_articles.insert_with(|id| BlogArticle {
        id,
        title: new.title,
        content: new.content,
        excerpt: new.excerpt,
        category: new.category,
        image_url: new.image_url,
        author_name: new.author_name,
        author_image_url: new.author_image_url,
        published: new.published,
        created_at: Utc::now(),
    });

    Ok((StatusCode::CREATED, Json(article)))
}

/// PUT /api/blog/:id
pub async fn update(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<i32>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<BlogArticle>, ApiError> {
    require_admin(&current)?;
    let patch: BlogArticlePatch =
        serde_json::from_value(body).map_err(|e| ApiError::invalid_json(e.to_string()))?;
    patch.validate()?;

    state
        .store
        .blog_articles
        .update_with(id, |article| patch.apply(article))
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Article not found"))
}

/// DELETE /api/blog/:id
pub async fn remove(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    require_admin(&current)?;
    if state.store.blog_articles.remove(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("Article not found"))
    }
}
