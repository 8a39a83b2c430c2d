//! Shared helpers for the end-to-end suites.
#![allow(dead_code)] // Not every suite uses every helper.

pub mod tmdb_mock;

use axum::Router;
use moviewiz_server::model::{train, RatingPipeline};
use moviewiz_server::store::TrainingRow;

/// Serve a router on a random local port and return its base URL.
pub async fn spawn_app(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Deterministic training rows with enough signal for the forest to fit.
pub fn synthetic_training_rows(count: usize) -> Vec<TrainingRow> {
    let genres = ["Action", "Comedy", "Drama"];
    (0..count)
        .map(|i| {
            let genre = genres[i % genres.len()];
            let runtime = 80 + (i as i64 * 7) % 80;
            TrainingRow {
                year: 1990 + (i as i64 % 30),
                runtime,
                genre: genre.to_string(),
                rating: 4.0 + runtime as f64 / 100.0 + (i % genres.len()) as f64 * 0.8,
            }
        })
        .collect()
}

/// A small but fully trained pipeline for serving tests.
pub fn trained_pipeline() -> RatingPipeline {
    train(&synthetic_training_rows(60)).unwrap().pipeline
}
