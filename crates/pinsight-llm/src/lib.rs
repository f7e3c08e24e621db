//! Generation-service orchestration for ProductInsights.
//!
//! Wraps an Ollama-style HTTP generation endpoint with a bounded TTL
//! response cache, linear-backoff retry, prompt-size guardrails, and
//! local lexicon fallbacks so every public operation returns a usable
//! result even when the service is down.

pub mod cache;
pub mod client;
pub mod error;
pub mod retry;
pub mod sample;
pub mod service;

mod prompts;

pub use cache::ResponseCache;
pub use client::{GenerateOutcome, GenerateResponse, GenerationClient, GenerationOptions};
pub use error::LlmError;
pub use retry::retry_generation;
pub use sample::{clean_texts, sample_records, sanitize_records};
pub use service::{
    ComprehensiveResult, ConnectionStatus, LlmService, SentimentCounts, SentimentReport,
};
