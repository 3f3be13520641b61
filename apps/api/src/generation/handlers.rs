//! Axum route handlers for analysis and email generation.

use axum::{
    extract::{
        multipart::{Multipart, MultipartError, MultipartRejection},
        rejection::JsonRejection,
        State,
    },
    Json,
};

use crate::errors::AppError;
use crate::generation::pipeline::{analyze_application, compose_email};
use crate::models::analysis::{
    AnalysisRequest, AnalysisResponse, EmailResponse, MailRequest, ResumeUpload,
};
use crate::state::AppState;

/// POST /analyze
///
/// Multipart form with a `resume` PDF and a `job_link`.
/// Returns the HTML match analysis and a drafted application email.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let mut multipart = multipart.map_err(|e| AppError::Validation(e.body_text()))?;

    let mut resume: Option<ResumeUpload> = None;
    let mut job_link: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(invalid_multipart)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let file_name = field.file_name().map(String::from);
                let content_type = field.content_type().map(String::from);
                let bytes = field.bytes().await.map_err(invalid_multipart)?;
                resume = Some(ResumeUpload {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            "job_link" => {
                job_link = Some(field.text().await.map_err(invalid_multipart)?);
            }
            _ => {}
        }
    }

    let resume =
        resume.ok_or_else(|| AppError::Validation("Missing form field: resume".to_string()))?;
    let job_link =
        job_link.ok_or_else(|| AppError::Validation("Missing form field: job_link".to_string()))?;

    let response = analyze_application(&state, resume, AnalysisRequest { job_link }).await?;
    Ok(Json(response))
}

/// POST /generate-email
///
/// Drafts an application email from already-extracted resume and job text.
pub async fn handle_generate_email(
    State(state): State<AppState>,
    request: Result<Json<MailRequest>, JsonRejection>,
) -> Result<Json<EmailResponse>, AppError> {
    let Json(request) = request.map_err(|e| AppError::Validation(e.body_text()))?;

    let email = compose_email(
        state.writer.as_ref(),
        &request.resume_content,
        &request.job_content,
    )
    .await?;

    Ok(Json(EmailResponse { email }))
}

fn invalid_multipart(e: MultipartError) -> AppError {
    AppError::Validation(format!("Invalid multipart body: {e}"))
}
