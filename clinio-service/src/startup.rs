//! Application startup and lifecycle management.

use crate::config::{ClinioConfig, StoreBackend};
use crate::handlers;
use crate::services::{
    AnalysisStore, ClinicalAnalyzer, DisabledAnalysisStore, MemoryAnalysisStore,
    MongoAnalysisStore, StubAnalyzer,
};
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use secrecy::ExposeSecret;
use service_core::error::AppError;
use service_core::middleware::{
    cors::permissive_cors,
    metrics::metrics_middleware,
    tracing::{make_request_span, request_id_middleware},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ClinioConfig,
    pub store: Arc<dyn AnalysisStore>,
    pub analyzer: Arc<dyn ClinicalAnalyzer>,
}

impl AppState {
    /// Connect the configured store and select the analyzer.
    pub async fn from_config(config: ClinioConfig) -> Result<Self, AppError> {
        let store: Arc<dyn AnalysisStore> = match config.store.backend {
            StoreBackend::Mongo => {
                let store =
                    MongoAnalysisStore::connect(&config.mongodb.uri, &config.mongodb.database)
                        .await?;
                Arc::new(store)
            }
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory store; analyses are lost on restart");
                Arc::new(MemoryAnalysisStore::new())
            }
            StoreBackend::Disabled => {
                tracing::info!("Store disabled, running in stub mode");
                Arc::new(DisabledAnalysisStore)
            }
        };

        store.initialize().await.map_err(|e| {
            tracing::error!(store = store.name(), "Failed to initialize store: {}", e);
            e
        })?;

        if config
            .ai
            .api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().is_empty())
        {
            tracing::info!("AI provider key configured but no provider analyzer is available; using stub analyzer");
        }
        let analyzer: Arc<dyn ClinicalAnalyzer> = Arc::new(StubAnalyzer::new());

        Ok(Self::new(config, store, analyzer))
    }

    pub fn new(
        config: ClinioConfig,
        store: Arc<dyn AnalysisStore>,
        analyzer: Arc<dyn ClinicalAnalyzer>,
    ) -> Self {
        Self {
            config,
            store,
            analyzer,
        }
    }
}

/// All routes with the shared middleware stack.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::service_root))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .route("/api", get(handlers::api_root))
        .route("/api/", get(handlers::api_root))
        .route("/api/analyze", post(handlers::analyze_symptoms))
        .route("/api/history", get(handlers::get_analysis_history))
        .route("/api/stats", get(handlers::get_stats))
        .fallback(handlers::route_not_found)
        .with_state(state)
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(from_fn(request_id_middleware))
        .layer(permissive_cors())
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: ClinioConfig) -> Result<Self, AppError> {
        let addr = config.common.socket_addr()?;
        let state = AppState::from_config(config).await?;
        Self::with_state(addr, state).await
    }

    /// Bind a listener for an already assembled state.
    pub async fn with_state(addr: std::net::SocketAddr, state: AppState) -> Result<Self, AppError> {
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            store = state.store.name(),
            analyzer = state.analyzer.name(),
            "Clinio service listening on port {}",
            port
        );

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until Ctrl+C or SIGTERM.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);
        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                std::io::Error::other(format!("HTTP server error: {}", e))
            })
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
