//! Label Reviews Gate
//!
//! Fails the workflow step when a pull request has fewer approving reviews
//! than its labels require.
//!
//! # Usage
//! ```bash
//! # Inside GitHub Actions (event path, token and workspace come from the runner)
//! label-reviews-gate
//!
//! # Locally, against a saved event payload
//! label-reviews-gate \
//!   --event-path ./event.json \
//!   --token $GITHUB_TOKEN \
//!   --config .github/label-requires-reviews.yml
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use label_reviews_gate::config::{resolve_config_path, DEFAULT_CONFIG_PATH};
use label_reviews_gate::github::DEFAULT_API_URL;
use label_reviews_gate::{gate, GitHubClient, Outcome};

#[derive(Parser, Debug)]
#[command(name = "label-reviews-gate")]
#[command(about = "Require approving reviews based on pull request labels")]
#[command(version)]
struct Args {
    /// Path to the event payload written by the runner
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    event_path: PathBuf,

    /// GitHub token (GITHUB_TOKEN, installation token or PAT)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: String,

    /// GitHub REST API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Rule configuration file, relative to the workspace unless absolute
    #[arg(long, env = "INPUT_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Repository checkout directory
    #[arg(long, env = "GITHUB_WORKSPACE", default_value = ".")]
    workspace: PathBuf,

    /// Output format: text (default), json
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

async fn run(args: &Args) -> Result<Outcome> {
    let client = GitHubClient::new(&args.api_url, &args.token)?;
    let config_path = resolve_config_path(&args.workspace, &args.config);
    let outcome = gate::run(&args.event_path, &config_path, &client)
        .await
        .context("Failed to check pull request reviews")?;
    Ok(outcome)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("🚀 Label reviews gate starting...");

    let outcome = match run(&args).await {
        Ok(outcome) => outcome,
        Err(err) => {
            error!("❌ {:#}", err);
            std::process::exit(1);
        }
    };

    match &outcome {
        Outcome::Success(message) => info!("✅ {}", message),
        Outcome::Failure(message) => error!("❌ {}", message),
        Outcome::Neutral(message) => warn!("⏭️  {}", message),
    }

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    }

    std::process::exit(outcome.exit_code());
}
