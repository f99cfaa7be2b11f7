use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, FieldErrors};

/// A listed position. Only active openings appear on the public careers page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOpening {
    pub id: i32,
    pub title: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub salary: String,
    pub description: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobOpeningDraft {
    pub title: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    pub salary: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
}

pub struct NewJobOpening {
    pub title: String,
    pub location: String,
    pub job_type: String,
    pub salary: String,
    pub description: String,
    pub active: bool,
}

impl JobOpeningDraft {
    pub fn validate(self) -> Result<NewJobOpening, ApiError> {
        let mut errors = FieldErrors::new();
        let title = errors.require_text("title", self.title);
        let location = errors.require_text("location", self.location);
        let job_type = errors.require_text("type", self.job_type);
        let salary = errors.require_text("salary", self.salary);
        let description = errors.require_text("description", self.description);
        errors.finish("Invalid job data")?;

        Ok(NewJobOpening {
            title: title.unwrap_or_default(),
            location: location.unwrap_or_default(),
            job_type: job_type.unwrap_or_default(),
            salary: salary.unwrap_or_default(),
            description: description.unwrap_or_default(),
            // New openings are listed unless explicitly created inactive
            active: self.active.unwrap_or(true),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobOpeningPatch {
    pub title: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    pub salary: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
}

impl JobOpeningPatch {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        errors.check_present_text("title", self.title.as_ref());
        errors.check_present_text("location", self.location.as_ref());
        errors.check_present_text("type", self.job_type.as_ref());
        errors.check_present_text("salary", self.salary.as_ref());
        errors.check_present_text("description", self.description.as_ref());
        errors.finish("Invalid job data")
    }

    pub fn apply(self, job: &mut JobOpening) {
        if let Some(v) = self.title {
            job.title = v;
        }
        if let Some(v) = self.location {
            job.location = v;
        }
        if let Some(v) = self.job_type {
            job.job_type = v;
        }
        if let Some(v) = self.salary {
            job.salary = v;
        }
        if let Some(v) = self.description {
            job.description = v;
        }
        if let Some(v) = self.active {
            job.active = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_openings_default_to_active() {
        let draft = JobOpeningDraft {
            title: Some("Designer".into()),
            location: Some("Remote".into()),
            job_type: Some("Full-time".into()),
            salary: Some("Competitive".into()),
            description: Some("Design things".into()),
            active: None,
        };
        assert!(draft.validate().unwrap().active);
    }

    #[test]
    fn type_field_uses_wire_name() {
        let draft: JobOpeningDraft =
            serde_json::from_str(r#"{"type": "Contract"}"#).unwrap();
        assert_eq!(draft.job_type.as_deref(), Some("Contract"));
    }
}
