//! TMDB catalog API client.

mod client;
mod models;

pub use client::{TmdbClient, TmdbError, DEFAULT_BASE_URL};
pub use models::{Genre, GenreMap, MovieDetails, RawDiscoverPage, RawMovieEntry};
