use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pinsight_core::ContentRecord;
use pinsight_llm::{LlmService, ResponseCache};

#[derive(Debug, Parser)]
#[command(name = "pinsight")]
#[command(about = "ProductInsights content analysis pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze a JSON file of content records and print the result document.
    Analyze {
        /// Path to a JSON array of content records.
        input: PathBuf,
        /// Source platform label (e.g. twitter, instagram, tiktok, amazon).
        #[arg(long)]
        platform: Option<String>,
        /// Pretty-print the output document.
        #[arg(long)]
        pretty: bool,
        /// Print the executive summary instead of the JSON document.
        #[arg(long)]
        summary: bool,
    },
    /// Check connectivity to the generation service.
    Ping,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = pinsight_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cache = Arc::new(ResponseCache::new(
        config.cache_max_entries,
        Duration::from_secs(config.cache_ttl_secs),
    ));
    let service = LlmService::new(&config, cache)?;
    match cli.command {
        Commands::Analyze {
            input,
            platform,
            pretty,
            summary,
        } => {
            let raw = std::fs::read_to_string(&input)?;
            let records: Vec<ContentRecord> = serde_json::from_str(&raw)?;
            tracing::info!(records = records.len(), input = %input.display(), "records loaded");

            let result = service
                .analyze_content_comprehensive(&records, platform.as_deref())
                .await;

            if summary {
                println!("{}", result.executive_summary);
            } else if pretty {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", serde_json::to_string(&result)?);
            }
        }
        Commands::Ping => {
            let status = service.test_connection().await;
            if status.ok {
                println!("generation service reachable");
            } else {
                println!(
                    "generation service unreachable: {}",
                    status.detail.unwrap_or_else(|| "unknown error".to_string())
                );
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
