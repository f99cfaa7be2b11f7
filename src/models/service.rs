use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, FieldErrors};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub features: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub features: Option<Vec<String>>,
}

pub struct NewService {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub features: Vec<String>,
}

impl ServiceDraft {
    pub fn validate(self) -> Result<NewService, ApiError> {
        let mut errors = FieldErrors::new();
        let title = errors.require_text("title", self.title);
        let description = errors.require_text("description", self.description);
        let icon = errors.require_text("icon", self.icon);
        let features = errors.require_list("features", self.features);
        errors.finish("Invalid service data")?;

        Ok(NewService {
            title: title.unwrap_or_default(),
            description: description.unwrap_or_default(),
            icon: icon.unwrap_or_default(),
            features: features.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServicePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub features: Option<Vec<String>>,
}

impl ServicePatch {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        errors.check_present_text("title", self.title.as_ref());
        errors.check_present_text("description", self.description.as_ref());
        errors.check_present_text("icon", self.icon.as_ref());
        errors.finish("Invalid service data")
    }

    pub fn apply(self, service: &mut Service) {
        if let Some(v) = self.title {
            service.title = v;
        }
        if let Some(v) = self.description {
            service.description = v;
        }
        if let Some(v) = self.icon {
            service.icon = v;
        }
        if let Some(v) = self.features {
            service.features = v;
        }
    }
}
