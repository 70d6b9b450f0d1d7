//! Application state shared across handlers

use std::sync::Arc;

use application::NearestStopService;
use infrastructure::TemplateEngine;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Place name to nearest stop pipeline
    pub service: Arc<NearestStopService>,
    /// HTML page renderer
    pub templates: TemplateEngine,
}

impl AppState {
    /// Create state from the pipeline and the page renderer
    #[must_use]
    pub fn new(service: Arc<NearestStopService>, templates: TemplateEngine) -> Self {
        Self { service, templates }
    }
}
