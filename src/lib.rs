//! MovieWiz Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod config;
pub mod ingestion;
pub mod model;
pub mod server;
pub mod store;
pub mod tmdb;

// Re-export commonly used types for convenience
pub use model::{load_latest_pipeline, save_pipeline, RatingPipeline};
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
pub use store::{MovieRecord, MovieStore, TrainingRow};
pub use tmdb::{GenreMap, TmdbClient};
