//! Application state for Axum handlers.

use hrmetrics_service::ReportService;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub report_service: Arc<dyn ReportService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(report_service: Arc<dyn ReportService>) -> Self {
        Self { report_service }
    }
}
