use std::sync::Arc;

use crate::llm_client::LlmClient;
use crate::store::ContentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The content store, constructed and seeded once in `main`.
    pub store: Arc<dyn ContentStore>,
    pub llm: LlmClient,
}
