//! A stand-in TMDB API served over a local axum router.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Clone)]
struct MockState {
    discover: Arc<serde_json::Value>,
    failing_detail_ids: Arc<HashSet<i64>>,
}

async fn genre_list() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "genres": [
            {"id": 35, "name": "Comedy"},
            {"id": 18, "name": "Drama"}
        ]
    }))
}

async fn discover(State(state): State<MockState>) -> Json<serde_json::Value> {
    Json(state.discover.as_ref().clone())
}

async fn movie_details(State(state): State<MockState>, Path(id): Path<i64>) -> Response {
    if state.failing_detail_ids.contains(&id) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    Json(serde_json::json!({"id": id, "runtime": 100 + id})).into_response()
}

/// Build a mock TMDB router serving a fixed genre list, the given discovery
/// page for every year, and synthetic details (`runtime = 100 + id`).
/// Detail calls for `failing_detail_ids` always return 500.
pub fn tmdb_router(discover_page: serde_json::Value, failing_detail_ids: &[i64]) -> Router {
    let state = MockState {
        discover: Arc::new(discover_page),
        failing_detail_ids: Arc::new(failing_detail_ids.iter().copied().collect()),
    };
    Router::new()
        .route("/genre/movie/list", get(genre_list))
        .route("/discover/movie", get(discover))
        .route("/movie/{id}", get(movie_details))
        .with_state(state)
}

/// A discovery entry with the minimal required fields.
pub fn discover_entry(id: i64, release_date: &str, genre_ids: &[i64]) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": format!("Movie {}", id),
        "release_date": release_date,
        "genre_ids": genre_ids,
        "overview": format!("Overview of movie {}", id),
        "popularity": 100.0 - id as f64,
        "vote_average": 7.0,
        "vote_count": 1000
    })
}

pub fn discover_page(entries: Vec<serde_json::Value>) -> serde_json::Value {
    serde_json::json!({
        "page": 1,
        "results": entries,
        "total_pages": 1,
        "total_results": 1
    })
}
