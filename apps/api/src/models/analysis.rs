use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Form fields accompanying a resume upload on `POST /analyze`.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub job_link: String,
}

/// The `resume` part of a multipart upload.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl ResumeUpload {
    /// Only uploads declared as `application/pdf` are accepted.
    pub fn ensure_pdf(&self) -> Result<(), AppError> {
        match self.content_type.as_deref() {
            Some(PDF_CONTENT_TYPE) => Ok(()),
            _ => Err(AppError::Validation(
                "Only PDF files are supported".to_string(),
            )),
        }
    }
}

/// Body of `POST /generate-email`. Absent fields deserialize as empty and are
/// rejected by the presence check rather than by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MailRequest {
    #[serde(default)]
    pub resume_content: String,
    #[serde(default)]
    pub job_content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub html_content: String,
    pub email_content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailResponse {
    pub email: String,
}
