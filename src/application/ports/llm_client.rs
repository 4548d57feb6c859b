use std::time::Duration;

use async_trait::async_trait;

/// Prompt-in/text-out contract over the upstream generative-text service.
///
/// Each call type carries its own latency budget, so the timeout is part of
/// the call rather than the client.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate(&self, prompt: &str, timeout: Duration) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
