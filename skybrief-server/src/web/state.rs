//! Application state for the web layer.

use std::sync::Arc;

use crate::noaa::ReportSource;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Where raw reports come from
    pub source: Arc<dyn ReportSource>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(source: impl ReportSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }
}
