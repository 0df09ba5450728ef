//! MongoDB-backed analysis store.

use super::AnalysisStore;
use crate::models::ClinicalAnalysis;
use crate::services::metrics::record_store_operation;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{FindOptions, IndexOptions},
    Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::error::AppError;
use std::time::Instant;

pub const ANALYSES_COLLECTION: &str = "clinical_analyses";

#[derive(Clone)]
pub struct MongoAnalysisStore {
    client: MongoClient,
    db: Database,
}

impl MongoAnalysisStore {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!("Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn analyses(&self) -> Collection<ClinicalAnalysis> {
        self.db.collection(ANALYSES_COLLECTION)
    }
}

#[async_trait]
impl AnalysisStore for MongoAnalysisStore {
    fn name(&self) -> &'static str {
        "mongo"
    }

    async fn initialize(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for clinio-service");
        let analyses = self.analyses();

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .name("id_idx".to_string())
                    .unique(true)
                    .build(),
            )
            .build();

        analyses.create_index(id_index, None).await.map_err(|e| {
            tracing::error!("Failed to create id index: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;

        let timestamp_index = IndexModel::builder()
            .keys(doc! { "timestamp": -1 })
            .options(
                IndexOptions::builder()
                    .name("timestamp_idx".to_string())
                    .build(),
            )
            .build();

        analyses
            .create_index(timestamp_index, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create timestamp index: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;

        tracing::info!("Successfully created all MongoDB indexes");
        Ok(())
    }

    async fn insert(&self, analysis: &ClinicalAnalysis) -> Result<(), AppError> {
        let start = Instant::now();
        let result = self.analyses().insert_one(analysis, None).await;
        record_store_operation("insert", self.name(), start.elapsed().as_secs_f64());

        result.map_err(|e| {
            tracing::error!(analysis_id = %analysis.id, "Failed to insert analysis: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;
        Ok(())
    }

    async fn find_recent(&self, limit: usize) -> Result<Vec<ClinicalAnalysis>, AppError> {
        let start = Instant::now();
        // ObjectIds grow with insertion, so they order records sharing a millisecond.
        let find_options = FindOptions::builder()
            .sort(doc! { "timestamp": -1, "_id": -1 })
            .limit(limit as i64)
            .build();

        let cursor = self
            .analyses()
            .find(doc! {}, find_options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to query analyses: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;

        let analyses: Vec<ClinicalAnalysis> = cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to collect analyses: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;

        record_store_operation("find_recent", self.name(), start.elapsed().as_secs_f64());
        Ok(analyses)
    }

    async fn count(&self) -> Result<u64, AppError> {
        let start = Instant::now();
        let total = self
            .analyses()
            .count_documents(doc! {}, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count analyses: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;

        record_store_operation("count", self.name(), start.elapsed().as_secs_f64());
        Ok(total)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;
        Ok(())
    }
}
