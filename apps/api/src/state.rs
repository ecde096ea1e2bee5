use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ChatCompletion;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Narrative backend. `None` when no API key was configured at startup;
    /// `/api/narrative` then answers 503.
    pub narrator: Option<Arc<dyn ChatCompletion>>,
}
