use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if any of the three Groq credentials is missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Credential for the ATS match analysis call.
    pub analysis_api_key: String,
    /// Credential for distilling scraped job pages.
    pub job_extraction_api_key: String,
    /// Credential for application email drafting.
    pub email_api_key: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            analysis_api_key: require_env("GROQ_API_KEY1")?,
            job_extraction_api_key: require_env("GROQ_API_KEY2")?,
            email_api_key: require_env("GROQ_API_KEY3")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.is_empty())
        .with_context(|| format!("Required environment variable '{key}' is not set"))
}
