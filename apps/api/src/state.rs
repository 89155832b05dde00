use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion backend. Production: OpenAiClient. Tests inject a stub.
    pub backend: Arc<dyn CompletionBackend>,
    /// Runtime settings; only startup reads these today.
    #[allow(dead_code)]
    pub config: Config,
}
