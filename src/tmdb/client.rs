//! HTTP client for the TMDB catalog API.
//!
//! All requests go through a retry-with-exponential-backoff wrapper: a
//! non-success response is retried after `0.5s * 2^attempt`, three attempts
//! total, no jitter.

use super::models::{GenreList, GenreMap, MovieDetails, RawDiscoverPage};
use chrono::Utc;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

const RETRIES: u32 = 3;
const BACKOFF_BASE: Duration = Duration::from_millis(500);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors that can occur when talking to TMDB.
#[derive(Debug, Error)]
pub enum TmdbError {
    #[error("TMDB request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("TMDB returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Client for the TMDB catalog API.
///
/// Stateless apart from the API key; the cached genre map is built once via
/// [`TmdbClient::load_genre_map`] and owned by the caller.
pub struct TmdbClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl TmdbClient {
    pub fn new(api_key: &str) -> Result<Self, TmdbError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a non-default base URL (used by tests).
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self, TmdbError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET with exponential-backoff retry. The API key and `language=en-US`
    /// are appended to every request.
    async fn get_with_retry<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, TmdbError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut attempt = 0u32;

        loop {
            let response = self
                .client
                .get(&url)
                .query(&[("api_key", self.api_key.as_str()), ("language", "en-US")])
                .query(params)
                .send()
                .await?;

            if response.status().is_success() {
                return Ok(response.json().await?);
            }

            attempt += 1;
            if attempt >= RETRIES {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(TmdbError::Status { status, body });
            }

            let backoff = BACKOFF_BASE * 2u32.pow(attempt - 1);
            warn!(
                "TMDB GET {} returned {}, retrying in {:?}",
                endpoint,
                response.status(),
                backoff
            );
            tokio::time::sleep(backoff).await;
        }
    }

    /// Fetch the full genre list and build the id-to-name lookup.
    ///
    /// Called once at process initialization; failure here is fatal to the
    /// caller, there is no fallback map.
    pub async fn load_genre_map(&self) -> Result<GenreMap, TmdbError> {
        let list: GenreList = self.get_with_retry("/genre/movie/list", &[]).await?;
        Ok(GenreMap::new(list.genres))
    }

    /// Fetch page 1 of the discovery endpoint for `year`: most popular first,
    /// capped to releases no later than today. Never paginates beyond page 1.
    pub async fn discover_top_by_year(&self, year: i32) -> Result<RawDiscoverPage, TmdbError> {
        let today = Utc::now().date_naive().to_string();
        self.get_with_retry(
            "/discover/movie",
            &[
                ("primary_release_year", year.to_string()),
                ("primary_release_date.lte", today),
                ("sort_by", "popularity.desc".to_string()),
                ("page", "1".to_string()),
            ],
        )
        .await
    }

    /// Fetch one movie's detail record, used solely to obtain `runtime`.
    /// No caching; repeated runs re-fetch the same id.
    pub async fn fetch_movie_details(&self, id: i64) -> Result<MovieDetails, TmdbError> {
        self.get_with_retry(&format!("/movie/{}", id), &[]).await
    }
}
