//! Job content — turns a job posting link into the job text the writers consume.
//!
//! The page is fetched, reduced to visible text, then distilled by the LLM into
//! company, role, description, skills and qualifications.

pub mod fetcher;
pub mod page_text;
pub mod prompts;

use async_trait::async_trait;
use tracing::info;

use crate::errors::AppError;
use crate::job::fetcher::JobPageFetcher;
use crate::job::prompts::JOB_EXTRACTION_PROMPT;
use crate::llm_client::prompts::render;
use crate::llm_client::LlmClient;

/// Resolves a job posting link into job text.
///
/// Carried in `AppState` as `Arc<dyn JobSource>`.
#[async_trait]
pub trait JobSource: Send + Sync {
    async fn job_content(&self, job_link: &str) -> Result<String, AppError>;
}

/// Production job source: HTTP fetch followed by LLM distillation.
pub struct ScrapingJobSource {
    fetcher: JobPageFetcher,
    llm: LlmClient,
}

impl ScrapingJobSource {
    pub fn new(fetcher: JobPageFetcher, llm: LlmClient) -> Self {
        Self { fetcher, llm }
    }
}

#[async_trait]
impl JobSource for ScrapingJobSource {
    async fn job_content(&self, job_link: &str) -> Result<String, AppError> {
        let job_link = job_link.trim();
        if job_link.is_empty() {
            return Err(AppError::Validation(
                "Please provide a valid job link".to_string(),
            ));
        }

        let page_data = self
            .fetcher
            .fetch_text(job_link)
            .await
            .map_err(|e| scrape_error(e.to_string()))?;

        let prompt = render(JOB_EXTRACTION_PROMPT, &[("page_data", &page_data)]);
        let job_content = self
            .llm
            .complete(&prompt)
            .await
            .map_err(|e| scrape_error(e.to_string()))?;

        info!("Distilled job posting into {} chars", job_content.len());
        Ok(job_content)
    }
}

fn scrape_error(cause: String) -> AppError {
    AppError::JobScrape(format!("Error scraping job content: {cause}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn source_for(server: &MockServer) -> ScrapingJobSource {
        ScrapingJobSource::new(
            JobPageFetcher::new().unwrap(),
            LlmClient::with_base_url("gsk_two".into(), &server.uri()).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_empty_link_is_rejected_without_network() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let source = source_for(&server);
        for link in ["", "   "] {
            let err = source.job_content(link).await.unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
            assert_eq!(err.to_string(), "Please provide a valid job link");
        }
    }

    #[tokio::test]
    async fn test_page_text_is_distilled_by_llm() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/careers/rust"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<html><body><p>Rust engineer at Acme</p></body></html>"),
            )
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_string_contains("### SCRAPED TEXT FROM WEBSITE:\\nRust engineer at Acme"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"role": "assistant", "content": "Company: Acme"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let content = source_for(&server)
            .job_content(&format!("{}/careers/rust", server.uri()))
            .await
            .unwrap();
        assert_eq!(content, "Company: Acme");
    }

    #[tokio::test]
    async fn test_fetch_failure_is_a_scrape_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = source_for(&server)
            .job_content(&format!("{}/job", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::JobScrape(_)));
        assert!(err.to_string().starts_with("Error scraping job content: HTTP 500"));
    }

    #[tokio::test]
    async fn test_distillation_failure_is_a_scrape_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>Job</p>"))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "error": {"message": "Rate limit reached"}
            })))
            .mount(&server)
            .await;

        let err = source_for(&server)
            .job_content(&format!("{}/job", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::JobScrape(_)));
        assert!(err.to_string().contains("Rate limit reached"));
    }
}
