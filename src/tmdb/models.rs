//! Response models for the TMDB API.

use serde::Deserialize;
use std::collections::HashMap;

/// One page of the discovery endpoint for a single year.
///
/// Only page 1 is ever requested, so `total_pages`/`total_results` are
/// informational.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDiscoverPage {
    pub page: i64,
    pub results: Vec<RawMovieEntry>,
    pub total_pages: i64,
    pub total_results: i64,
}

/// A raw movie entry as returned by the discovery endpoint.
///
/// Every field except `release_date` is required; a response missing one of
/// them is a schema mismatch and fails deserialization. `release_date` may be
/// absent or empty, in which case the row is dropped during normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMovieEntry {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    pub genre_ids: Vec<i64>,
    pub overview: String,
    pub popularity: f64,
    pub vote_average: f64,
    pub vote_count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenreList {
    pub genres: Vec<Genre>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// Detail record for a single movie. Only `runtime` is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetails {
    pub id: i64,
    pub runtime: Option<i64>,
}

/// Immutable genre-id-to-name lookup, built once at startup and injected
/// into the normalizer.
#[derive(Debug, Clone, Default)]
pub struct GenreMap {
    names: HashMap<i64, String>,
}

impl GenreMap {
    pub fn new(genres: Vec<Genre>) -> Self {
        Self {
            names: genres.into_iter().map(|g| (g.id, g.name)).collect(),
        }
    }

    /// Resolve a genre id to its display name. Unknown ids get a synthesized
    /// placeholder label instead of failing.
    pub fn name_for(&self, id: i64) -> String {
        self.names
            .get(&id)
            .cloned()
            .unwrap_or_else(|| format!("Unknown ({})", id))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(i64, String)> for GenreMap {
    fn from_iter<T: IntoIterator<Item = (i64, String)>>(iter: T) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_map_known_id() {
        let map: GenreMap = [(35, "Comedy".to_string())].into_iter().collect();
        assert_eq!(map.name_for(35), "Comedy");
    }

    #[test]
    fn test_genre_map_unknown_id_gets_placeholder() {
        let map = GenreMap::default();
        assert_eq!(map.name_for(99), "Unknown (99)");
        assert!(!map.name_for(99).is_empty());
    }

    #[test]
    fn test_raw_entry_missing_required_field_is_schema_error() {
        // No `title` field.
        let value = serde_json::json!({
            "id": 1,
            "release_date": "2020-01-01",
            "genre_ids": [35],
            "overview": "",
            "popularity": 1.0,
            "vote_average": 7.0,
            "vote_count": 10
        });
        assert!(serde_json::from_value::<RawMovieEntry>(value).is_err());
    }

    #[test]
    fn test_raw_entry_missing_release_date_is_allowed() {
        let value = serde_json::json!({
            "id": 1,
            "title": "Untitled",
            "genre_ids": [],
            "overview": "",
            "popularity": 1.0,
            "vote_average": 7.0,
            "vote_count": 10
        });
        let entry: RawMovieEntry = serde_json::from_value(value).unwrap();
        assert!(entry.release_date.is_none());
    }
}
