//! Retry wrapper for transient upstream overloads.
//!
//! Attempt n fails with the overload marker and n < max_retries → sleep `delays[n]`,
//! then attempt n + 1. Any other failure, or running out of retries, is returned as-is.

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::llm_client::LlmError;

pub const MAX_RETRIES: usize = 4;
pub const RETRY_DELAYS: [Duration; MAX_RETRIES] = [
    Duration::from_secs(1),
    Duration::from_secs(2),
    Duration::from_secs(4),
    Duration::from_secs(8),
];

/// Backoff table; the number of entries is the retry cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    delays: Vec<Duration>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            delays: RETRY_DELAYS.to_vec(),
        }
    }
}

impl RetryPolicy {
    pub fn new(delays: Vec<Duration>) -> Self {
        Self { delays }
    }

    /// A policy that never retries.
    pub fn none() -> Self {
        Self { delays: Vec::new() }
    }

    pub fn max_retries(&self) -> usize {
        self.delays.len()
    }
}

/// Runs `op` until it succeeds, fails non-transiently, or the policy is exhausted.
///
/// `cancel` is checked before every attempt and raced against every backoff sleep;
/// cancellation returns `LlmError::Cancelled` without another attempt.
pub async fn with_retry<T, F, Fut>(
    policy: &RetryPolicy,
    cancel: &CancellationToken,
    mut op: F,
) -> Result<T, LlmError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, LlmError>>,
{
    let mut attempt = 0usize;
    loop {
        if cancel.is_cancelled() {
            return Err(LlmError::Cancelled);
        }

        match op().await {
            Ok(value) => {
                if attempt > 0 {
                    debug!("LLM call succeeded on attempt {}", attempt + 1);
                }
                return Ok(value);
            }
            Err(e) if e.is_transient() && attempt < policy.max_retries() => {
                let delay = policy.delays[attempt];
                warn!(
                    "LLM call attempt {} hit a transient failure ({e}), retrying after {}ms...",
                    attempt + 1,
                    delay.as_millis()
                );
                tokio::select! {
                    _ = cancel.cancelled() => return Err(LlmError::Cancelled),
                    _ = tokio::time::sleep(delay) => {}
                }
                attempt += 1;
            }
            Err(e) => {
                if e.is_transient() {
                    warn!("LLM call still overloaded after {} attempts", attempt + 1);
                }
                return Err(e);
            }
        }
    }
}
