//! Deterministic placeholder analyzer.

use super::{AnalysisOutcome, AnalyzerError, ClinicalAnalyzer};
use crate::models::{DifferentialDiagnoses, DifferentialDiagnosis};
use async_trait::async_trait;

/// Characters of the symptom text echoed into the summary.
pub const SUMMARY_SYMPTOM_CHARS: usize = 50;

/// Returns the same three-category differential for every input.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubAnalyzer;

impl StubAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn summary_for(symptoms: &str) -> String {
        let excerpt: String = symptoms.chars().take(SUMMARY_SYMPTOM_CHARS).collect();
        format!("Clinical analysis completed for: {}...", excerpt)
    }

    pub fn fixed_differential() -> DifferentialDiagnoses {
        DifferentialDiagnoses {
            common: vec![DifferentialDiagnosis::new(
                "Common condition based on symptoms",
                "Medium",
                "Clinical reasoning based on presented symptoms",
            )],
            life_threatening: vec![DifferentialDiagnosis::new(
                "Serious condition to rule out",
                "Low",
                "Important to exclude based on symptoms",
            )],
            rare: vec![DifferentialDiagnosis::new(
                "Rare condition",
                "Low",
                "Less likely but worth considering",
            )],
        }
    }
}

#[async_trait]
impl ClinicalAnalyzer for StubAnalyzer {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn analyze(
        &self,
        symptoms: &str,
        _patient_context: &str,
    ) -> Result<AnalysisOutcome, AnalyzerError> {
        Ok(AnalysisOutcome {
            summary: Self::summary_for(symptoms),
            differential_diagnoses: Self::fixed_differential(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn summary_embeds_short_symptoms_verbatim() {
        let outcome = StubAnalyzer::new()
            .analyze("fever and cough", "")
            .await
            .unwrap();
        assert_eq!(
            outcome.summary,
            "Clinical analysis completed for: fever and cough..."
        );
    }

    #[test]
    fn summary_truncates_to_fifty_characters() {
        let symptoms = "a".repeat(80);
        let summary = StubAnalyzer::summary_for(&symptoms);
        assert_eq!(
            summary,
            format!("Clinical analysis completed for: {}...", "a".repeat(50))
        );
    }

    #[test]
    fn summary_counts_characters_not_bytes() {
        let symptoms = "é".repeat(60);
        let summary = StubAnalyzer::summary_for(&symptoms);
        assert!(summary.contains(&"é".repeat(50)));
        assert!(!summary.contains(&"é".repeat(51)));
    }

    #[test]
    fn empty_symptoms_still_produce_summary() {
        assert_eq!(
            StubAnalyzer::summary_for(""),
            "Clinical analysis completed for: ..."
        );
    }

    #[tokio::test]
    async fn differential_ignores_input_content() {
        let analyzer = StubAnalyzer::new();
        let a = analyzer.analyze("chest pain", "58 year old").await.unwrap();
        let b = analyzer.analyze("rash", "").await.unwrap();

        assert_eq!(a.differential_diagnoses, b.differential_diagnoses);
        let d = &a.differential_diagnoses;
        for entries in [&d.common, &d.life_threatening, &d.rare] {
            assert_eq!(entries.len(), 1);
        }
        assert_eq!(a.differential_diagnoses.common[0].likelihood, "Medium");
        assert_eq!(a.differential_diagnoses.rare[0].condition, "Rare condition");
    }
}
