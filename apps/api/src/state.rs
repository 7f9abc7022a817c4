use std::sync::Arc;

use crate::assistant::JobAssistant;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<JobAssistant>,
    pub config: Config,
}
