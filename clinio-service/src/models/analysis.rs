//! Clinical analysis record persisted per `POST /api/analyze`.

use chrono::{DateTime, SubsecRound, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One candidate condition in a differential diagnosis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DifferentialDiagnosis {
    pub condition: String,
    pub likelihood: String,
    pub reasoning: String,
}

impl DifferentialDiagnosis {
    pub fn new(
        condition: impl Into<String>,
        likelihood: impl Into<String>,
        reasoning: impl Into<String>,
    ) -> Self {
        Self {
            condition: condition.into(),
            likelihood: likelihood.into(),
            reasoning: reasoning.into(),
        }
    }
}

/// Candidate conditions grouped by category.
///
/// Serializes as a map with exactly the keys `common`, `life_threatening` and
/// `rare`, each an ordered list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DifferentialDiagnoses {
    #[serde(default)]
    pub common: Vec<DifferentialDiagnosis>,
    #[serde(default)]
    pub life_threatening: Vec<DifferentialDiagnosis>,
    #[serde(default)]
    pub rare: Vec<DifferentialDiagnosis>,
}

/// A stored clinical analysis. Immutable once inserted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicalAnalysis {
    /// Identity assigned by MongoDB; absent until read back from the store.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<ObjectId>,
    pub id: String,
    pub symptoms: String,
    #[serde(default)]
    pub patient_context: String,
    pub differential_diagnoses: DifferentialDiagnoses,
    pub summary: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl ClinicalAnalysis {
    pub fn new(
        symptoms: String,
        patient_context: String,
        summary: String,
        differential_diagnoses: DifferentialDiagnoses,
    ) -> Self {
        Self {
            object_id: None,
            id: Uuid::new_v4().to_string(),
            symptoms,
            patient_context,
            differential_diagnoses,
            summary,
            // BSON dates carry millisecond precision.
            timestamp: Utc::now().trunc_subsecs(3),
            is_favorite: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis() -> ClinicalAnalysis {
        ClinicalAnalysis::new(
            "headache".to_string(),
            String::new(),
            "summary".to_string(),
            DifferentialDiagnoses::default(),
        )
    }

    #[test]
    fn new_analysis_has_fresh_id_and_defaults() {
        let a = analysis();
        let b = analysis();

        assert!(Uuid::parse_str(&a.id).is_ok());
        assert_ne!(a.id, b.id);
        assert!(!a.is_favorite);
        assert!(a.object_id.is_none());
        assert_eq!(a.timestamp.timestamp_subsec_nanos() % 1_000_000, 0);
    }

    #[test]
    fn bson_round_trip_keeps_timestamp_and_omits_missing_object_id() {
        let original = analysis();
        let document = mongodb::bson::to_document(&original).unwrap();

        assert!(!document.contains_key("_id"));
        assert!(document.get_datetime("timestamp").is_ok());

        let restored: ClinicalAnalysis = mongodb::bson::from_document(document).unwrap();
        assert_eq!(restored.timestamp, original.timestamp);
        assert_eq!(restored.id, original.id);
    }

    #[test]
    fn differential_serializes_all_three_categories() {
        let value = serde_json::to_value(DifferentialDiagnoses::default()).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();

        assert_eq!(keys, ["common", "life_threatening", "rare"]);
    }
}
