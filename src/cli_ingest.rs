use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use moviewiz_server::config::{database_path, tmdb_api_key};
use moviewiz_server::ingestion::run_yearly_top;
use moviewiz_server::store::MovieStore;
use moviewiz_server::tmdb::TmdbClient;

#[derive(Parser, Debug)]
struct CliArgs {
    /// First year of the ingestion range; the range always ends at the
    /// current year.
    #[clap(long, default_value_t = 1990)]
    pub start_year: i32,
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

    let api_key = tmdb_api_key()?;
    let db_path = database_path()?;

    let client = TmdbClient::new(&api_key)?;
    let store = MovieStore::new(&db_path)?;

    info!("Loading genre map...");
    let genre_map = client
        .load_genre_map()
        .await
        .context("Could not load the TMDB genre list")?;
    info!("Genre map loaded ({} genres)", genre_map.len());

    let report = run_yearly_top(&client, &genre_map, &store, cli_args.start_year).await?;

    info!(
        "Ingestion finished: {} rows across {} years ({} empty)",
        report.rows_inserted, report.years_processed, report.years_empty
    );

    Ok(())
}
