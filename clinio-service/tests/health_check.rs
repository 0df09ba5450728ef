//! End-to-end tests against a live listener.
//!
//! The in-memory store keeps these independent of MongoDB.

use clinio_service::config::{ClinioConfig, StoreBackend};
use clinio_service::startup::Application;
use reqwest::Client;
use std::time::Duration;

/// Spawn the application on a random port and return its base URL.
async fn spawn_app() -> String {
    let config = ClinioConfig::for_backend(StoreBackend::Memory);
    let app = Application::build(config)
        .await
        .expect("Failed to build application");

    let address = format!("http://127.0.0.1:{}", app.port());

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    // Wait for the server to accept connections
    let client = Client::new();
    for _ in 0..50 {
        if client.get(format!("{}/health", address)).send().await.is_ok() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    address
}

#[tokio::test]
async fn health_check_returns_healthy() {
    let address = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", address))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);
    assert!(response.headers().contains_key("x-request-id"));

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "clinio-backend");
}

#[tokio::test]
async fn analyze_then_history_over_http() {
    let address = spawn_app().await;
    let client = Client::new();

    let created: serde_json::Value = client
        .post(format!("{}/api/analyze", address))
        .json(&serde_json::json!({"symptoms": "sore throat", "patient_context": "teenager"}))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");

    let history: Vec<serde_json::Value> = client
        .get(format!("{}/api/history", address))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");

    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["id"], created["id"]);
    assert_eq!(history[0]["patient_context"], "teenager");
}

#[tokio::test]
async fn cors_allows_any_origin_with_credentials() {
    let address = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/stats", address))
        .header("origin", "http://localhost:3000")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "http://localhost:3000"
    );
    assert_eq!(
        response.headers()["access-control-allow-credentials"],
        "true"
    );
}
