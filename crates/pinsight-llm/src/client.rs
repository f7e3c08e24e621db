//! HTTP client for the Ollama-style generation endpoint.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::LlmError;

/// Sampling options sent with every generation request.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationOptions {
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
    pub num_predict: u32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        // Low temperature keeps repeated analyses consistent.
        Self {
            temperature: 0.3,
            top_k: 40,
            top_p: 0.9,
            num_predict: 1000,
        }
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: &'a GenerationOptions,
}

/// Successful generation payload. Token counts are informational and may
/// be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub response: String,
    #[serde(default)]
    pub prompt_eval_count: Option<i64>,
    #[serde(default)]
    pub eval_count: Option<i64>,
}

/// Result of one transport round-trip.
///
/// `ApiError` carries non-2xx responses in-band: the service answered, so
/// retrying would not help — callers fall back to local heuristics
/// instead. Transport failures surface as [`LlmError`] and are retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    Success(GenerateResponse),
    ApiError { status: u16, message: String },
}

impl GenerateOutcome {
    /// The generated text, when the call succeeded.
    #[must_use]
    pub fn response(&self) -> Option<&str> {
        match self {
            GenerateOutcome::Success(r) => Some(&r.response),
            GenerateOutcome::ApiError { .. } => None,
        }
    }
}

/// Client for the `/api/generate` endpoint.
pub struct GenerationClient {
    client: reqwest::Client,
    api_url: String,
    model: String,
    options: GenerationOptions,
}

impl GenerationClient {
    /// Creates a `GenerationClient` with the configured request timeout.
    ///
    /// The request timeout is long (generation is slow); the connect
    /// timeout is a fixed 10 seconds so an unreachable host fails fast.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(api_url: &str, model: &str, timeout_secs: u64) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            api_url: api_url.to_string(),
            model: model.to_string(),
            options: GenerationOptions::default(),
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// One generation round-trip, no caching or retry.
    ///
    /// A non-2xx status is returned in-band as
    /// [`GenerateOutcome::ApiError`]; it is logged but not an `Err`.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Http`] on connection failure, timeout, or a
    /// 2xx body that does not parse as a generation payload.
    pub async fn generate(&self, prompt: &str) -> Result<GenerateOutcome, LlmError> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: &self.options,
        };

        let started = Instant::now();
        let response = self.client.post(&self.api_url).json(&request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                "generation service returned error status"
            );
            return Ok(GenerateOutcome::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        tracing::info!(
            elapsed_secs = started.elapsed().as_secs_f64(),
            eval_count = parsed.eval_count,
            "generation response received"
        );
        Ok(GenerateOutcome::Success(parsed))
    }
}
