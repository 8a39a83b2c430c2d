//! Schema definition for the movies table.

/// Versioned schema for the movie store.
pub struct MovieSchema {
    pub version: usize,
    pub up: &'static str,
}

// No uniqueness constraint on tmdb_id: repeated ingestion runs may append
// duplicates for a resurfaced movie.
pub const MOVIE_VERSIONED_SCHEMAS: &[MovieSchema] = &[MovieSchema {
    version: 1,
    up: r#"
            CREATE TABLE IF NOT EXISTS movies (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                tmdb_id INTEGER NOT NULL,
                title TEXT NOT NULL,
                release_date TEXT NOT NULL,
                overview TEXT NOT NULL,
                popularity REAL NOT NULL,
                rating REAL NOT NULL,
                vote_count INTEGER NOT NULL,
                genre_names TEXT NOT NULL,
                runtime INTEGER
            );
        "#,
}];
