use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{ApiError, FieldErrors};

/// A submitted application. The resume, when present, is stored inline as a
/// data URI rather than on a separate blob store; job_id is a soft reference
/// that survives deletion of the opening it points at.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: i32,
    pub job_id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: String,
    pub resume_url: Option<String>,
    pub cover_letter: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Raw intake fields as they arrive from the multipart form. Text parts come
/// in as strings; the handler fills resume_url after the file checks pass.
#[derive(Debug, Default)]
pub struct JobApplicationDraft {
    pub job_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
    pub cover_letter: Option<String>,
    pub resume_url: Option<String>,
}

#[derive(Debug)]
pub struct NewJobApplication {
    pub job_id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: String,
    pub resume_url: Option<String>,
    pub cover_letter: Option<String>,
}

impl JobApplicationDraft {
    pub fn validate(self) -> Result<NewJobApplication, ApiError> {
        let mut errors = FieldErrors::new();
        let first_name = errors.require_text("firstName", self.first_name);
        let last_name = errors.require_text("lastName", self.last_name);
        let email = errors.require_email("email", self.email);
        let position = errors.require_text("position", self.position);

        let job_id = match self.job_id.as_deref().filter(|v| !v.is_empty()) {
            Some(raw) => match raw.parse::<i32>() {
                Ok(id) => Some(id),
                Err(_) => {
                    errors.add("jobId", "Must be a number");
                    None
                }
            },
            None => None,
        };

        errors.finish("Invalid application data")?;

        Ok(NewJobApplication {
            job_id,
            first_name: first_name.unwrap_or_default(),
            last_name: last_name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            position: position.unwrap_or_default(),
            resume_url: self.resume_url,
            cover_letter: self.cover_letter.filter(|v| !v.is_empty()),
        })
    }
}
