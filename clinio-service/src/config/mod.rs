use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct ClinioConfig {
    pub common: core_config::Config,
    pub service_name: String,
    pub store: StoreConfig,
    pub mongodb: MongoConfig,
    pub ai: AiProviderConfig,
    pub observability: ObservabilityConfig,
}

/// Which [`AnalysisStore`](crate::services::AnalysisStore) backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// Records persisted to MongoDB.
    Mongo,
    /// Records kept in process memory; lost on restart.
    Memory,
    /// Stub mode: nothing persisted, history empty, stats zero.
    Disabled,
}

impl FromStr for StoreBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(StoreBackend::Mongo),
            "memory" => Ok(StoreBackend::Memory),
            "disabled" | "stub" | "none" => Ok(StoreBackend::Disabled),
            other => Err(AppError::ConfigError(anyhow::anyhow!(
                "Unknown STORE_BACKEND '{}': expected mongo, memory or disabled",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: StoreBackend,
}

#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

/// Credentials for an external reasoning provider.
///
/// No provider-backed analyzer exists yet; the key is carried so one can be
/// wired in without a config change.
#[derive(Debug, Clone)]
pub struct AiProviderConfig {
    pub api_key: Option<Secret<String>>,
}

#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
}

impl ClinioConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(ClinioConfig {
            common: common_config,
            service_name: get_env("SERVICE_NAME", Some("clinio-backend"), is_prod)?,
            store: StoreConfig {
                backend: get_env("STORE_BACKEND", Some("mongo"), is_prod)?.parse()?,
            },
            mongodb: MongoConfig {
                uri: get_env("MONGODB_URI", Some("mongodb://localhost:27017"), is_prod)?,
                database: get_env("MONGODB_DATABASE", Some("clinio_production"), is_prod)?,
            },
            ai: AiProviderConfig {
                api_key: env::var("AI_PROVIDER_API_KEY")
                    .ok()
                    .filter(|key| !key.is_empty())
                    .map(Secret::new),
            },
            observability: ObservabilityConfig {
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|e| !e.is_empty()),
            },
        })
    }

    /// In-process configuration for tests and embedding; no environment reads.
    pub fn for_backend(backend: StoreBackend) -> Self {
        ClinioConfig {
            common: core_config::Config {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            service_name: "clinio-backend".to_string(),
            store: StoreConfig { backend },
            mongodb: MongoConfig {
                uri: "mongodb://localhost:27017".to_string(),
                database: "clinio_production".to_string(),
            },
            ai: AiProviderConfig { api_key: None },
            observability: ObservabilityConfig {
                log_level: "info".to_string(),
                otlp_endpoint: None,
            },
        }
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
