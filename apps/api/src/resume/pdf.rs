//! PDF text extraction via `pdf-extract`.

use async_trait::async_trait;
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::resume::ResumeExtractor;

/// Extracts text page by page and concatenates the pages in order, no separators.
pub struct PdfResumeExtractor;

#[async_trait]
impl ResumeExtractor for PdfResumeExtractor {
    async fn extract_text(&self, document: Bytes) -> Result<String, AppError> {
        // pdf-extract is CPU-bound and may panic on malformed input
        let text = tokio::task::spawn_blocking(move || extract_pdf_text(&document))
            .await
            .map_err(|e| pdf_error(format!("extraction task failed: {e}")))??;

        info!("Extracted {} chars of resume text", text.len());
        Ok(text)
    }
}

pub fn extract_pdf_text(document: &[u8]) -> Result<String, AppError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(document)
        .map_err(|e| pdf_error(e.to_string()))?;
    Ok(pages.concat())
}

fn pdf_error(cause: String) -> AppError {
    AppError::PdfExtraction(format!("Error extracting text from PDF: {cause}"))
}
