//! End-to-end tests for the prediction service over real HTTP.

mod common;

use common::{spawn_app, trained_pipeline};
use moviewiz_server::model::{load_latest_pipeline, save_pipeline};
use moviewiz_server::server::{make_app, RequestsLoggingLevel, ServerConfig};
use reqwest::StatusCode;
use tempfile::TempDir;

fn quiet_config() -> ServerConfig {
    ServerConfig {
        requests_logging_level: RequestsLoggingLevel::None,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_health_returns_ok() {
    let base_url = spawn_app(make_app(quiet_config(), trained_pipeline())).await;

    let response = reqwest::get(format!("{}/health", base_url)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({"status": "ok"}));
}

#[tokio::test]
async fn test_home_reports_uptime_and_version() {
    let base_url = spawn_app(make_app(quiet_config(), trained_pipeline())).await;

    let response = reqwest::get(format!("{}/", base_url)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["uptime"].is_string());
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_predict_returns_numeric_rating() {
    let base_url = spawn_app(make_app(quiet_config(), trained_pipeline())).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/predict", base_url))
        .json(&serde_json::json!({"year": 2021, "runtime": 100, "genre": "Comedy"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    let rating = body["predictedRating"].as_f64().unwrap();
    assert!(rating.is_finite());
}

#[tokio::test]
async fn test_predict_served_from_saved_artifact() {
    let dir = TempDir::new().unwrap();
    let pipeline = trained_pipeline();
    let expected = pipeline.predict(2021, 100.0, "Comedy").unwrap();

    save_pipeline(dir.path(), &pipeline).unwrap();
    let loaded = load_latest_pipeline(dir.path()).unwrap();
    let base_url = spawn_app(make_app(quiet_config(), loaded)).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/predict", base_url))
        .json(&serde_json::json!({"year": 2021, "runtime": 100, "genre": "Comedy"}))
        .send()
        .await
        .unwrap();

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["predictedRating"].as_f64().unwrap(), expected);
}

#[tokio::test]
async fn test_predict_rejects_malformed_body() {
    let base_url = spawn_app(make_app(quiet_config(), trained_pipeline())).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/predict", base_url))
        .header("content-type", "application/json")
        .body(r#"{"year": "nineteen-ninety"}"#)
        .send()
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}
