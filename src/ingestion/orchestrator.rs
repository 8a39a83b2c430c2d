//! Drives ingestion across a year range.

use super::normalizer::{fetch_runtimes, normalize};
use crate::store::MovieStore;
use crate::tmdb::{GenreMap, TmdbClient};
use anyhow::Result;
use chrono::{Datelike, Utc};
use tracing::{info, warn};

/// Summary of one orchestrator run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IngestReport {
    pub years_processed: u32,
    pub years_empty: u32,
    pub rows_inserted: usize,
}

/// Ingest the top-popularity page for every year in `[start_year, current]`.
///
/// Empty years are reported and skipped; no year is retried. Errors from
/// discovery or persistence propagate and halt the run, leaving prior years'
/// batches committed.
pub async fn run_yearly_top(
    client: &TmdbClient,
    genre_map: &GenreMap,
    store: &MovieStore,
    start_year: i32,
) -> Result<IngestReport> {
    let current_year = Utc::now().year();
    let mut report = IngestReport::default();

    for year in start_year..=current_year {
        info!("Fetching top movies for {}...", year);
        let page = client.discover_top_by_year(year).await?;
        let runtimes = fetch_runtimes(client, &page).await;
        let records = normalize(&page, &runtimes, genre_map);

        report.years_processed += 1;
        if records.is_empty() {
            warn!("No results for {}", year);
            report.years_empty += 1;
            continue;
        }

        let inserted = store.append_movies(&records)?;
        report.rows_inserted += inserted;
        info!("Inserted {} movies for {}", inserted, year);
    }

    Ok(report)
}
