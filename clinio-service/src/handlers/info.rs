use axum::{http::Uri, response::IntoResponse, Json};
use serde_json::json;
use service_core::error::AppError;

pub const API_VERSION: &str = "1.0.0";

/// Service banner at `/`.
pub async fn service_root() -> impl IntoResponse {
    Json(json!({
        "message": "Clinio Backend is running",
        "api_docs": "/docs"
    }))
}

/// API name and version at `/api/`.
pub async fn api_root() -> impl IntoResponse {
    Json(json!({
        "message": "Clinio API - Clinical Decision Support",
        "version": API_VERSION
    }))
}

/// JSON 404 for paths no route matches.
pub async fn route_not_found(uri: Uri) -> AppError {
    AppError::NotFound(anyhow::anyhow!("No route for {}", uri.path()))
}
