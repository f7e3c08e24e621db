#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Application configuration, loaded from environment variables.
///
/// Every knob has a default; the analysis pipeline is expected to come up
/// with zero required configuration and degrade gracefully when the
/// generation service is unreachable.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Full URL of the Ollama generate endpoint.
    pub ollama_url: String,
    /// Model identifier sent with every generation request.
    pub ollama_model: String,
    /// Request timeout for generation calls. Generation is slow; the
    /// default is deliberately long.
    pub llm_timeout_secs: u64,
    /// Total transport attempts per generation call (not re-attempts).
    pub llm_max_attempts: u32,
    /// Base delay for linear retry backoff: the sleep after attempt `k`
    /// is `base × k` seconds.
    pub llm_retry_base_delay_secs: u64,
    /// Hard ceiling on outgoing prompt length, in characters.
    pub llm_max_prompt_chars: usize,
    pub cache_max_entries: usize,
    pub cache_ttl_secs: u64,
}
