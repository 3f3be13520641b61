//! HTTP fetching of job posting pages.

use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info};

use super::page_text::visible_text;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} for: {url}")]
    Status { status: u16, url: String },
}

/// Loads a single job posting page and returns its visible text.
#[derive(Clone)]
pub struct JobPageFetcher {
    client: Client,
}

impl JobPageFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    pub async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        debug!("Fetching job page: {url}");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let html = response.text().await?;
        let text = visible_text(&html);

        info!("Fetched {} chars of page text from: {url}", text.len());
        Ok(text)
    }
}
