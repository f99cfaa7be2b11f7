use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, FieldErrors};

/// Portfolio entry shown on the showcase pages.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub client: String,
    pub image_url: String,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

/// Create payload. Every field optional at the wire level so validation can
/// report all missing fields in one pass.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub client: Option<String>,
    pub image_url: Option<String>,
    pub featured: Option<bool>,
}

#[derive(Debug)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub category: String,
    pub client: String,
    pub image_url: String,
    pub featured: bool,
}

impl ProjectDraft {
    pub fn validate(self) -> Result<NewProject, ApiError> {
        let mut errors = FieldErrors::new();
        let title = errors.require_text("title", self.title);
        let description = errors.require_text("description", self.description);
        let category = errors.require_text("category", self.category);
        let client = errors.require_text("client", self.client);
        let image_url = errors.require_url("imageUrl", self.image_url);
        errors.finish("Invalid project data")?;

        Ok(NewProject {
            title: title.unwrap_or_default(),
            description: description.unwrap_or_default(),
            category: category.unwrap_or_default(),
            client: client.unwrap_or_default(),
            image_url: image_url.unwrap_or_default(),
            featured: self.featured.unwrap_or(false),
        })
    }
}

/// Partial update; omitted fields are left untouched.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub client: Option<String>,
    pub image_url: Option<String>,
    pub featured: Option<bool>,
}

impl ProjectPatch {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        errors.check_present_text("title", self.title.as_ref());
        errors.check_present_text("description", self.description.as_ref());
        errors.check_present_text("category", self.category.as_ref());
        errors.check_present_text("client", self.client.as_ref());
        errors.check_present_url("imageUrl", self.image_url.as_ref());
        errors.finish("Invalid project data")
    }

    pub fn apply(self, project: &mut Project) {
        if let Some(v) = self.title {
            project.title = v;
        }
        if let Some(v) = self.description {
            project.description = v;
        }
        if let Some(v) = self.category {
            project.category = v;
        }
        if let Some(v) = self.client {
            project.client = v;
        }
        if let Some(v) = self.image_url {
            project.image_url = v;
        }
        if let Some(v) = self.featured {
            project.featured = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_reports_every_missing_field() {
        let err = ProjectDraft::default().validate().unwrap_err();
        let body = err.to_json();
        for field in ["title", "description", "category", "client", "imageUrl"] {
            assert!(
                body["field_errors"][field].is_string(),
                "expected error for {field}"
            );
        }
    }

    #[test]
    fn draft_rejects_relative_image_url() {
        let draft = ProjectDraft {
            title: Some("Site".into()),
            description: Some("desc".into()),
            category: Some("Web Design".into()),
            client: Some("Acme".into()),
            image_url: Some("/images/site.png".into()),
            featured: None,
        };
        let err = draft.validate().unwrap_err();
        assert!(err.to_json()["field_errors"]["imageUrl"].is_string());
    }

    #[test]
    fn patch_only_touches_supplied_fields() {
        let mut project = Project {
            id: 1,
            title: "Old".into(),
            description: "Keep me".into(),
            category: "Web Design".into(),
            client: "Acme".into(),
            image_url: "https://example.com/a.png".into(),
            featured: false,
            created_at: Utc::now(),
        };
        ProjectPatch {
            title: Some("New".into()),
            ..Default::default()
        }
        .apply(&mut project);

        assert_eq!(project.title, "New");
        assert_eq!(project.description, "Keep me");
        assert!(!project.featured);
    }
}
