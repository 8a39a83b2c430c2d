use anyhow::Result;
use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::state::{GuardedPipeline, ServerState};
use super::{log_requests, ServerConfig};
use crate::model::RatingPipeline;

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub version: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Deserialize, Debug)]
struct PredictBody {
    pub year: i32,
    pub runtime: f64,
    pub genre: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictResponse {
    predicted_rating: f64,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    Json(ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Static liveness check, independent of anything else in the process.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Run one inference for a (year, runtime, genre) input.
///
/// Errors map to a structured JSON body with a 500 status rather than a bare
/// logging side effect; unknown genres encode as all-zero and still predict.
async fn predict(
    State(pipeline): State<GuardedPipeline>,
    Json(body): Json<PredictBody>,
) -> Response {
    match pipeline.predict(body.year, body.runtime, &body.genre) {
        Ok(predicted_rating) => Json(PredictResponse { predicted_rating }).into_response(),
        Err(err) => {
            error!("Prediction failed for {:?}: {}", body, err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

pub fn make_app(config: ServerConfig, pipeline: RatingPipeline) -> Router {
    let state = ServerState::new(config, pipeline);

    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/api/predict", post(predict))
        .layer(middleware::from_fn_with_state(state.clone(), log_requests))
        .with_state(state)
}

pub async fn run_server(config: ServerConfig, pipeline: RatingPipeline) -> Result<()> {
    let port = config.port;
    let app = make_app(config, pipeline);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    info!("Prediction service listening on {}", listener.local_addr()?);

    Ok(axum::serve(listener, app).await?)
}
