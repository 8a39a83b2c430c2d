//! Process configuration resolved from the environment.
//!
//! Secrets and connection strings come from environment variables only;
//! everything else is plain CLI arguments on the individual binaries.

use anyhow::{Context, Result};
use std::path::PathBuf;

pub const TMDB_API_KEY_VAR: &str = "TMDB_API_KEY";
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Read a required environment variable, failing with a descriptive error.
pub fn require_env(name: &str) -> Result<String> {
    std::env::var(name).with_context(|| format!("Environment variable {} must be set", name))
}

/// The TMDB API key, sent as a query parameter on every catalog request.
pub fn tmdb_api_key() -> Result<String> {
    require_env(TMDB_API_KEY_VAR)
}

/// Path to the SQLite database file holding the movies table.
pub fn database_path() -> Result<PathBuf> {
    require_env(DATABASE_URL_VAR).map(PathBuf::from)
}
