//! Row models for the movie store.

use chrono::NaiveDate;

/// A normalized movie row, constructed per year-batch by the normalizer and
/// persisted by bulk append. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecord {
    pub tmdb_id: i64,
    pub title: String,
    /// Always valid: rows with missing or unparsable raw dates are dropped
    /// before a record is ever constructed.
    pub release_date: NaiveDate,
    pub overview: String,
    pub popularity: f64,
    /// Renamed from TMDB's `vote_average`.
    pub rating: f64,
    pub vote_count: i64,
    /// Genre ids expanded to display names, raw response order preserved.
    pub genre_names: Vec<String>,
    /// Minutes, from the per-movie detail call. Absent if the detail fetch
    /// failed or did not supply one.
    pub runtime: Option<i64>,
}

/// One training example as read back out of the movies table.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingRow {
    /// Year extracted from `release_date`.
    pub year: i64,
    pub runtime: i64,
    /// First genre name of the row.
    pub genre: String,
    pub rating: f64,
}
