//! SQLite persistence for normalized movie records.

mod models;
mod movie_store;
mod schema;

pub use models::{MovieRecord, TrainingRow};
pub use movie_store::MovieStore;
