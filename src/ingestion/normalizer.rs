//! Raw discovery page to movie record normalization.

use crate::store::MovieRecord;
use crate::tmdb::{GenreMap, RawDiscoverPage, TmdbClient};
use chrono::NaiveDate;
use futures::StreamExt;
use tracing::{debug, warn};

const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// How many detail calls run in flight at once. The detail-fetch loop is the
/// dominant latency source of the pipeline, so a little parallelism goes a
/// long way against a 20-entry page.
const DETAIL_FETCH_CONCURRENCY: usize = 4;

/// Fetch the runtime for every raw entry of a discovery page, in order.
///
/// A failed detail fetch logs a warning and yields `None` for that entry;
/// it never drops the row and never aborts the batch.
pub async fn fetch_runtimes(client: &TmdbClient, page: &RawDiscoverPage) -> Vec<Option<i64>> {
    futures::stream::iter(page.results.iter().map(|entry| async move {
        match client.fetch_movie_details(entry.id).await {
            Ok(details) => details.runtime,
            Err(err) => {
                warn!("Runtime fetch for movie {} failed: {}", entry.id, err);
                None
            }
        }
    }))
    .buffered(DETAIL_FETCH_CONCURRENCY)
    .collect()
    .await
}

/// Pure transform of a raw discovery page into movie records.
///
/// Renames `id` to `tmdb_id` and `vote_average` to `rating`, expands genre
/// ids through the genre map, and attaches the pre-fetched runtimes
/// positionally. Rows whose release date is missing or does not parse as
/// `YYYY-MM-DD` are dropped; everything that survives has a valid date.
/// Output preserves the raw response order.
pub fn normalize(
    page: &RawDiscoverPage,
    runtimes: &[Option<i64>],
    genre_map: &GenreMap,
) -> Vec<MovieRecord> {
    let mut records = Vec::with_capacity(page.results.len());

    for (index, entry) in page.results.iter().enumerate() {
        let raw_date = entry.release_date.as_deref().unwrap_or_default();
        let release_date = match NaiveDate::parse_from_str(raw_date, RELEASE_DATE_FORMAT) {
            Ok(date) => date,
            Err(_) => {
                debug!(
                    "Dropping movie {} ({:?}): invalid release date {:?}",
                    entry.id, entry.title, raw_date
                );
                continue;
            }
        };

        let genre_names = entry
            .genre_ids
            .iter()
            .map(|&id| genre_map.name_for(id))
            .collect();

        records.push(MovieRecord {
            tmdb_id: entry.id,
            title: entry.title.clone(),
            release_date,
            overview: entry.overview.clone(),
            popularity: entry.popularity,
            rating: entry.vote_average,
            vote_count: entry.vote_count,
            genre_names,
            runtime: runtimes.get(index).copied().flatten(),
        });
    }

    records
}
