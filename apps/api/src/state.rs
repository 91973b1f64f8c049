use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::llm_client::retry::RetryPolicy;
use crate::llm_client::TextGenerator;
use crate::parsing::ParseOptions;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one upstream text generator. `GeminiClient` in production.
    pub llm: Arc<dyn TextGenerator>,
    pub parse_options: ParseOptions,
    /// Backoff table for idea generation.
    pub retry_policy: RetryPolicy,
    /// Cancelled on shutdown; handlers hand child tokens to the retry loop.
    pub shutdown: CancellationToken,
}
