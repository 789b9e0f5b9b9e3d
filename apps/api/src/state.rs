use std::sync::Arc;

use crate::config::Config;
use crate::document::DocumentReader;
use crate::screening::evaluation::Evaluator;
use crate::screening::extractor::FieldExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Regexes compiled once for the configured locale.
    pub extractor: Arc<FieldExtractor>,
    /// Pluggable PDF text reader. Default: PdfTextReader.
    pub document_reader: Arc<dyn DocumentReader>,
    /// Pluggable evaluation backend. Default: LlmEvaluator.
    pub evaluator: Arc<dyn Evaluator>,
}
