use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use moviewiz_server::model::load_latest_pipeline;
use moviewiz_server::server::{run_server, RequestsLoggingLevel, ServerConfig};

#[derive(Parser, Debug)]
struct CliArgs {
    /// Directory holding the trained model artifacts.
    #[clap(long, default_value = "models")]
    pub models_dir: PathBuf,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    info!("Loading latest model from {:?}...", cli_args.models_dir);
    // No fallback: a missing or corrupt artifact means the process never
    // reaches serving state.
    let pipeline = load_latest_pipeline(&cli_args.models_dir)
        .context("Could not load the latest model artifact")?;
    info!(
        "Model loaded ({} genre categories)",
        pipeline.genre_categories().len()
    );

    let config = ServerConfig {
        requests_logging_level: cli_args.logging_level,
        port: cli_args.port,
    };

    run_server(config, pipeline).await
}
