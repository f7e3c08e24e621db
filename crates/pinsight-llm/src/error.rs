use thiserror::Error;

/// Transport-level failures talking to the generation service.
///
/// Application-level failures (non-2xx status, unusable payload content)
/// are NOT errors here — they surface in-band as
/// [`crate::client::GenerateOutcome::ApiError`] and are never retried.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
