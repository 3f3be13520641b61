//! Application writer — the two LLM-backed writing tasks over a resume/job pair.

use async_trait::async_trait;
use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::{ANALYSIS_PROMPT_TEMPLATE, EMAIL_PROMPT_TEMPLATE};
use crate::llm_client::prompts::render;
use crate::llm_client::LlmClient;

/// Produces the match analysis and the application email.
/// Outputs are raw model text; nothing checks that the HTML is well-formed.
///
/// Carried in `AppState` as `Arc<dyn ApplicationWriter>`.
#[async_trait]
pub trait ApplicationWriter: Send + Sync {
    async fn match_analysis(&self, resume: &str, job: &str) -> Result<String, AppError>;

    async fn application_email(&self, resume: &str, job: &str) -> Result<String, AppError>;
}

/// Groq-backed writer. Each task uses its own credential.
pub struct LlmApplicationWriter {
    analysis_llm: LlmClient,
    email_llm: LlmClient,
}

impl LlmApplicationWriter {
    pub fn new(analysis_llm: LlmClient, email_llm: LlmClient) -> Self {
        Self {
            analysis_llm,
            email_llm,
        }
    }
}

#[async_trait]
impl ApplicationWriter for LlmApplicationWriter {
    async fn match_analysis(&self, resume: &str, job: &str) -> Result<String, AppError> {
        let prompt = render(
            ANALYSIS_PROMPT_TEMPLATE,
            &[("resume_content", resume), ("job_content", job)],
        );
        let html = self
            .analysis_llm
            .complete(&prompt)
            .await
            .map_err(|e| AppError::Llm(format!("Match analysis failed: {e}")))?;

        info!("Match analysis generated ({} chars)", html.len());
        Ok(html)
    }

    async fn application_email(&self, resume: &str, job: &str) -> Result<String, AppError> {
        let prompt = render(
            EMAIL_PROMPT_TEMPLATE,
            &[("job_content", job), ("resume_content", resume)],
        );
        let email = self
            .email_llm
            .complete(&prompt)
            .await
            .map_err(|e| AppError::Llm(format!("Email generation failed: {e}")))?;

        info!("Application email generated ({} chars)", email.len());
        Ok(email)
    }
}
