use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use moviewiz_server::config::database_path;
use moviewiz_server::model::{save_pipeline, train};
use moviewiz_server::store::MovieStore;

#[derive(Parser, Debug)]
struct CliArgs {
    /// Directory to write the trained model artifacts into.
    #[clap(long, default_value = "models")]
    pub models_dir: PathBuf,
}

fn main() -> Result<()> {
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

    let db_path = database_path()?;
    let store = MovieStore::new(&db_path)?;

    let rows = store.load_training_rows()?;
    info!("Loaded {} training rows from the movies table", rows.len());

    let summary = train(&rows)?;

    let artifact = save_pipeline(&cli_args.models_dir, &summary.pipeline)?;
    info!(
        "Wrote model version {} to {:?}",
        artifact.version, artifact.versioned_path
    );

    Ok(())
}
