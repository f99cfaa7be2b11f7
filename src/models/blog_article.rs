use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, FieldErrors};

/// Blog entry. Unpublished drafts are visible to admins only; the public read
/// path reports them as not found rather than forbidden.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogArticle {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub category: String,
    pub image_url: String,
    pub author_name: String,
    pub author_image_url: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogArticleDraft {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub author_name: Option<String>,
    pub author_image_url: Option<String>,
    pub published: Option<bool>,
}

pub struct NewBlogArticle {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub category: String,
    pub image_url: String,
    pub author_name: String,
    pub author_image_url: String,
    pub published: bool,
}

impl BlogArticleDraft {
    pub fn validate(self) -> Result<NewBlogArticle, ApiError> {
        let mut errors = FieldErrors::new();
        let title = errors.require_text("title", self.title);
        let content = errors.require_text("content", self.content);
        let excerpt = errors.require_text("excerpt", self.excerpt);
        let category = errors.require_text("category", self.category);
        let image_url = errors.require_url("imageUrl", self.image_url);
        let author_name = errors.require_text("authorName", self.author_name);
        let author_image_url = errors.require_url("authorImageUrl", self.author_image_url);
        errors.finish("Invalid article data")?;

        Ok(NewBlogArticle {
            title: title.unwrap_or_default(),
            content: content.unwrap_or_default(),
            excerpt: excerpt.unwrap_or_default(),
            category: category.unwrap_or_default(),
            image_url: image_url.unwrap_or_default(),
            author_name: author_name.unwrap_or_default(),
            author_image_url: author_image_url.unwrap_or_default(),
            // Articles start as drafts unless explicitly published
            published: self.published.unwrap_or(false),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogArticlePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub author_name: Option<String>,
    pub author_image_url: Option<String>,
    pub published: Option<bool>,
}

impl BlogArticlePatch {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        errors.check_present_text("title", self.title.as_ref());
        errors.check_present_text("content", self.content.as_ref());
        errors.check_present_text("excerpt", self.excerpt.as_ref());
        errors.check_present_text("category", self.category.as_ref());
        errors.check_present_url("imageUrl", self.image_url.as_ref());
        errors.check_present_text("authorName", self.author_name.as_ref());
        errors.check_present_url("authorImageUrl", self.author_image_url.as_ref());
        errors.finish("Invalid article data")
    }

    pub fn apply(self, article: &mut BlogArticle) {
        if let Some(v) = self.title {
            article.title = v;
        }
        if let Some(v) = self.content {
            article.content = v;
        }
        if let Some(v) = self.excerpt {
            article.excerpt = v;
        }
        if let Some(v) = self.category {
            article.category = v;
        }
        if let Some(v) = self.image_url {
            article.image_url = v;
        }
        if let Some(v) = self.author_name {
            article.author_name = v;
        }
        if let Some(v) = self.author_image_url {
            article.author_image_url = v;
        }
        if let Some(v) = self.published {
            article.published = v;
        }
    }
}
