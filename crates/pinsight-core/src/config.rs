use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an unparseable value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an unparseable value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("PINSIGHT_ENV", "development"));
    let log_level = or_default("PINSIGHT_LOG_LEVEL", "info");

    let ollama_url = or_default(
        "PINSIGHT_OLLAMA_URL",
        "http://localhost:11434/api/generate",
    );
    let ollama_model = or_default("PINSIGHT_OLLAMA_MODEL", "deepseek-r1:8b");

    let llm_timeout_secs = parse_u64("PINSIGHT_LLM_TIMEOUT_SECS", "120")?;
    let llm_max_attempts = parse_u32("PINSIGHT_LLM_MAX_ATTEMPTS", "2")?;
    let llm_retry_base_delay_secs = parse_u64("PINSIGHT_LLM_RETRY_BASE_DELAY_SECS", "2")?;
    let llm_max_prompt_chars = parse_usize("PINSIGHT_LLM_MAX_PROMPT_CHARS", "8000")?;

    let cache_max_entries = parse_usize("PINSIGHT_CACHE_MAX_ENTRIES", "100")?;
    let cache_ttl_secs = parse_u64("PINSIGHT_CACHE_TTL_SECS", "3600")?;

    Ok(AppConfig {
        env,
        log_level,
        ollama_url,
        ollama_model,
        llm_timeout_secs,
        llm_max_attempts,
        llm_retry_base_delay_secs,
        llm_max_prompt_chars,
        cache_max_entries,
        cache_ttl_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
