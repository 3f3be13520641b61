//! Analysis pipeline: upload → resume text → job text → match analysis → email.
//! Every step runs to completion before the next one starts.

use tracing::info;

use crate::errors::AppError;
use crate::generation::writer::ApplicationWriter;
use crate::models::analysis::{AnalysisRequest, AnalysisResponse, ResumeUpload};
use crate::state::AppState;

pub async fn analyze_application(
    state: &AppState,
    upload: ResumeUpload,
    request: AnalysisRequest,
) -> Result<AnalysisResponse, AppError> {
    upload.ensure_pdf()?;

    info!(
        "Analyzing resume {:?} ({} bytes) against {}",
        upload.file_name,
        upload.bytes.len(),
        request.job_link
    );

    let resume_content = state.resume_extractor.extract_text(upload.bytes).await?;
    let job_content = state.job_source.job_content(&request.job_link).await?;

    let html_content = state
        .writer
        .match_analysis(&resume_content, &job_content)
        .await?;
    let email_content =
        compose_email(state.writer.as_ref(), &resume_content, &job_content).await?;

    Ok(AnalysisResponse {
        html_content,
        email_content,
    })
}

/// Drafts the application email. Both inputs must be non-empty.
pub async fn compose_email(
    writer: &dyn ApplicationWriter,
    resume_content: &str,
    job_content: &str,
) -> Result<String, AppError> {
    if resume_content.is_empty() || job_content.is_empty() {
        return Err(AppError::Validation(
            "Resume or job content is missing".to_string(),
        ));
    }

    writer.application_email(resume_content, job_content).await
}
