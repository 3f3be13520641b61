mod config;
mod errors;
mod generation;
mod job;
mod llm_client;
mod models;
mod resume;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::writer::LlmApplicationWriter;
use crate::job::fetcher::JobPageFetcher;
use crate::job::ScrapingJobSource;
use crate::llm_client::LlmClient;
use crate::resume::pdf::PdfResumeExtractor;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing Groq credentials)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Smart ATS Resume Analyzer API v{}", env!("CARGO_PKG_VERSION"));

    // One LLM client per credential
    let analysis_llm = LlmClient::new(config.analysis_api_key.clone())?;
    let job_llm = LlmClient::new(config.job_extraction_api_key.clone())?;
    let email_llm = LlmClient::new(config.email_api_key.clone())?;
    info!("LLM clients initialized (model: {})", llm_client::MODEL);

    let state = AppState {
        resume_extractor: Arc::new(PdfResumeExtractor),
        job_source: Arc::new(ScrapingJobSource::new(JobPageFetcher::new()?, job_llm)),
        writer: Arc::new(LlmApplicationWriter::new(analysis_llm, email_llm)),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
