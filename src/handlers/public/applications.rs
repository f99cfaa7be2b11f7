// Job application intake: the one unauthenticated mutation, and the one
// multipart route in the API.
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Json,
};
use base64::{engine::general_purpose, Engine as _};
use chrono::Utc;
use serde_json::{json, Value};

use crate::config;
use crate::error::{ApiError, FieldErrors};
use crate::models::{JobApplication, JobApplicationDraft};
use crate::state::AppState;

/// POST /api/applications - multipart form with an optional `resume` file.
///
/// The file checks run before anything is persisted: a rejected attachment
/// means no application record at all, never a partial one.
pub async fn submit(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let mut draft = JobApplicationDraft::default();
    let mut resume: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        if name == "resume" {
            let content_type = field.content_type().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::bad_request(format!("Failed to read resume: {e}")))?;
            resume = Some((content_type, data.to_vec()));
            continue;
        }

        let text = field
            .text()
            .await
            .map_err(|e| ApiError::bad_request(format!("Malformed multipart body: {e}")))?;
        match name.as_str() {
            "jobId" => draft.job_id = Some(text),
            "firstName" => draft.first_name = Some(text),
            "lastName" => draft.last_name = Some(text),
            "email" => draft.email = Some(text),
            "position" => draft.position = Some(text),
            "coverLetter" => draft.cover_letter = Some(text),
            // Unknown parts are ignored, matching lenient form handling
            _ => {}
        }
    }

    if let Some((content_type, data)) = &resume {
        check_resume(content_type, data.len())?;
    }

    draft.resume_url = resume.map(|(content_type, data)| {
        format!(
            "data:{};base64,{}",
            content_type,
            general_purpose::STANDARD.encode(&data)
        )
    });

    let new = draft.validate()?;
    let application = state.store.job_applications.insert_with(|id| JobApplication {
        id,
        job_id: new.job_id,
        first_name: new.first_name,
        last_name: new.last_name,
        email: new.email,
        position: new.position,
        resume_url: new.resume_url,
        cover_letter: new.cover_letter,
        created_at: Utc::now(),
    });

    tracing::info!(
        id = application.id,
        email = %application.email,
        "new job application received"
    );

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Application submitted successfully" })),
    ))
}

fn check_resume(content_type: &str, size: usize) -> Result<(), ApiError> {
    let uploads = &config::config().uploads;
    let mut errors = FieldErrors::new();

    if !uploads
        .allowed_resume_types
        .iter()
        .any(|allowed| allowed == content_type)
    {
        errors.add("resume", "Unsupported file type");
    }
    if size > uploads.max_resume_bytes {
        errors.add("resume", "File exceeds the 5 MiB limit");
    }

    if !errors.is_empty() {
        tracing::warn!(content_type, size, "rejected resume attachment");
    }
    errors.finish("Invalid application data")
}
