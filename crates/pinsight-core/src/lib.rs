//! Shared domain types and configuration for ProductInsights.
//!
//! Content records arrive from platform-specific collectors (Twitter,
//! Instagram, TikTok, Amazon reviews) with inconsistent field names; this
//! crate owns the normalized [`ContentRecord`] shape and the env-driven
//! [`AppConfig`] the rest of the workspace reads.

pub mod app_config;
pub mod config;
pub mod record;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use record::{ContentRecord, EngagementCounts};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
