use crate::models::{ClinicalAnalysis, DifferentialDiagnoses};
use serde::{Deserialize, Serialize};

/// Number of clinical reference sections bundled with the client app.
pub const CLINICAL_SECTIONS: u32 = 250;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub symptoms: String,
    #[serde(default)]
    pub patient_context: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Store identity as a hex string; only present on records read back from MongoDB.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub storage_id: Option<String>,
    pub id: String,
    pub symptoms: String,
    pub patient_context: String,
    pub differential_diagnoses: DifferentialDiagnoses,
    pub summary: String,
    pub timestamp: String,
    pub is_favorite: bool,
}

impl From<ClinicalAnalysis> for AnalysisResponse {
    fn from(analysis: ClinicalAnalysis) -> Self {
        Self {
            storage_id: analysis.object_id.map(|oid| oid.to_hex()),
            id: analysis.id,
            symptoms: analysis.symptoms,
            patient_context: analysis.patient_context,
            differential_diagnoses: analysis.differential_diagnoses,
            summary: analysis.summary,
            timestamp: analysis.timestamp.to_rfc3339(),
            is_favorite: analysis.is_favorite,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_analyses: u64,
    pub clinical_sections: u32,
}

impl StatsResponse {
    pub fn new(total_analyses: u64) -> Self {
        Self {
            total_analyses,
            clinical_sections: CLINICAL_SECTIONS,
        }
    }
}
