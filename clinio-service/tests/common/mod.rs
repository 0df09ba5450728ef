//! Shared helpers for clinio-service integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use clinio_service::config::{ClinioConfig, StoreBackend};
use clinio_service::services::{
    AnalysisStore, ClinicalAnalyzer, MemoryAnalysisStore, StubAnalyzer,
};
use clinio_service::startup::{build_router, AppState};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::util::ServiceExt;

/// Router over an in-memory store, driven in-process.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<dyn AnalysisStore>,
}

impl TestApp {
    pub fn with_memory_store() -> Self {
        Self::with_parts(
            StoreBackend::Memory,
            Arc::new(MemoryAnalysisStore::new()),
            Arc::new(StubAnalyzer::new()),
        )
    }

    pub fn with_parts(
        backend: StoreBackend,
        store: Arc<dyn AnalysisStore>,
        analyzer: Arc<dyn ClinicalAnalyzer>,
    ) -> Self {
        let state = AppState::new(ClinioConfig::for_backend(backend), store.clone(), analyzer);
        Self {
            router: build_router(state),
            store,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.send(
            Request::builder()
                .method(Method::GET)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        self.send(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Non-JSON GET returning the content type and body text.
    pub async fn get_text(&self, uri: &str) -> (StatusCode, String, String) {
        let response = self
            .router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    pub async fn post_raw(&self, uri: &str, body: &'static str) -> StatusCode {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
            .status()
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
        };
        (status, body)
    }
}
