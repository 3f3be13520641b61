use std::sync::Arc;

use crate::generation::writer::ApplicationWriter;
use crate::job::JobSource;
use crate::resume::ResumeExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Each collaborator is a trait object so the handlers can run against fakes.
#[derive(Clone)]
pub struct AppState {
    pub resume_extractor: Arc<dyn ResumeExtractor>,
    pub job_source: Arc<dyn JobSource>,
    pub writer: Arc<dyn ApplicationWriter>,
}
