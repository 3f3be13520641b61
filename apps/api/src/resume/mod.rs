//! Resume ingestion — turns an uploaded resume document into plain text.

pub mod pdf;

use async_trait::async_trait;
use bytes::Bytes;

use crate::errors::AppError;

/// Converts raw resume bytes into text.
///
/// Carried in `AppState` as `Arc<dyn ResumeExtractor>`.
#[async_trait]
pub trait ResumeExtractor: Send + Sync {
    async fn extract_text(&self, document: Bytes) -> Result<String, AppError>;
}
