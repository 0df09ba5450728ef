use crate::dtos::{AnalysisResponse, AnalyzeRequest, StatsResponse};
use crate::models::ClinicalAnalysis;
use crate::services::{metrics::record_analysis_created, AnalyzerError, HISTORY_LIMIT};
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;

/// Run the analyzer on the submitted symptoms and persist the result.
pub async fn analyze_symptoms(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let patient_context = request.patient_context.unwrap_or_default();

    let outcome = state
        .analyzer
        .analyze(&request.symptoms, &patient_context)
        .await
        .map_err(|e| {
            tracing::error!(analyzer = state.analyzer.name(), "Analysis failed: {}", e);
            match e {
                AnalyzerError::NotConfigured(_) => AppError::ServiceUnavailable,
                AnalyzerError::ProviderError(msg) => AppError::BadGateway(msg),
            }
        })?;

    let analysis = ClinicalAnalysis::new(
        request.symptoms,
        patient_context,
        outcome.summary,
        outcome.differential_diagnoses,
    );

    state.store.insert(&analysis).await?;

    record_analysis_created(state.analyzer.name(), state.store.name());
    tracing::info!(
        analysis_id = %analysis.id,
        analyzer = state.analyzer.name(),
        store = state.store.name(),
        "Clinical analysis created"
    );

    Ok(Json(AnalysisResponse::from(analysis)))
}

/// The most recent analyses, newest first.
pub async fn get_analysis_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<AnalysisResponse>>, AppError> {
    let analyses = state.store.find_recent(HISTORY_LIMIT).await?;
    tracing::debug!(count = analyses.len(), "Fetched analysis history");

    Ok(Json(
        analyses.into_iter().map(AnalysisResponse::from).collect(),
    ))
}

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let total_analyses = state.store.count().await?;
    Ok(Json(StatsResponse::new(total_analyses)))
}
