use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionProvider;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Holds nothing mutable: every request runs its own extract/prompt/tag pipeline.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion backend. Default: `OpenAiClient`.
    pub llm: Arc<dyn CompletionProvider>,
    pub config: Config,
}
