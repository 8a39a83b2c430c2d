//! Movie store implementation.
//!
//! Deliberately non-pooled: every call opens a fresh connection and closes
//! it on return, so no connection state is shared across calls.

use super::models::{MovieRecord, TrainingRow};
use super::schema::MOVIE_VERSIONED_SCHEMAS;
use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Append-only store for normalized movie rows.
#[derive(Debug, Clone)]
pub struct MovieStore {
    db_path: PathBuf,
}

impl MovieStore {
    /// Create a store for the given database file.
    ///
    /// Opens one connection up front to initialize the schema, then drops it.
    pub fn new(db_path: &Path) -> Result<Self> {
        let store = Self {
            db_path: db_path.to_path_buf(),
        };
        store.open()?;
        Ok(store)
    }

    fn open(&self) -> Result<Connection> {
        let conn = Connection::open(&self.db_path)
            .with_context(|| format!("Failed to open movie database at {:?}", self.db_path))?;

        let schema = MOVIE_VERSIONED_SCHEMAS.last().unwrap();
        conn.execute_batch(schema.up)
            .context("Failed to initialize movies schema")?;

        Ok(conn)
    }

    /// Bulk-append a batch of records in a single transaction.
    ///
    /// Pure append: no upsert, no conflict handling, no retry. An empty batch
    /// is a no-op and never opens a connection. Returns the number of rows
    /// written.
    pub fn append_movies(&self, records: &[MovieRecord]) -> Result<usize> {
        if records.is_empty() {
            debug!("Empty batch, skipping write");
            return Ok(0);
        }

        let mut conn = self.open()?;
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO movies
                 (tmdb_id, title, release_date, overview, popularity, rating, vote_count, genre_names, runtime)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            for record in records {
                let genre_names = serde_json::to_string(&record.genre_names)?;
                stmt.execute(params![
                    record.tmdb_id,
                    record.title,
                    record.release_date.to_string(),
                    record.overview,
                    record.popularity,
                    record.rating,
                    record.vote_count,
                    genre_names,
                    record.runtime,
                ])?;
            }
        }
        tx.commit()?;

        Ok(records.len())
    }

    /// Total number of persisted rows.
    pub fn count_movies(&self) -> Result<i64> {
        let conn = self.open()?;
        let count = conn.query_row("SELECT COUNT(*) FROM movies", [], |row| row.get(0))?;
        Ok(count)
    }

    /// The trainer's single bulk read: project {year, runtime, genre, rating}
    /// across all rows. Rows without a runtime or without any genre carry no
    /// usable features and are skipped.
    pub fn load_training_rows(&self) -> Result<Vec<TrainingRow>> {
        let conn = self.open()?;
        let mut stmt = conn.prepare(
            "SELECT CAST(strftime('%Y', release_date) AS INTEGER), runtime, genre_names, rating
             FROM movies
             WHERE runtime IS NOT NULL",
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, f64>(3)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut training_rows = Vec::with_capacity(rows.len());
        for (year, runtime, genre_names, rating) in rows {
            let genres: Vec<String> = serde_json::from_str(&genre_names)
                .with_context(|| format!("Invalid genre_names column: {}", genre_names))?;
            let Some(genre) = genres.into_iter().next() else {
                continue;
            };
            training_rows.push(TrainingRow {
                year,
                runtime,
                genre,
                rating,
            });
        }

        Ok(training_rows)
    }
}
