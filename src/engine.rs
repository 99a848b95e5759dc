//! Results orchestration and completion validation.
//!
//! [`calculate_results`] runs the five scoring stages in order over a
//! response snapshot. It is a pure function: callers are expected to gate it
//! behind [`validate_completion`], but an incomplete snapshot still produces
//! a well-formed (low-scoring) result rather than a panic.

use crate::questions;
use crate::scoring::{
    assign_phase, calculate_dimensional_scores, coherence_label, coherence_score, estimate_time,
    gate_score, severity_multiplier, terrain_label, terrain_score, DimensionalScores, Phase,
    PhasePolicy, ScoreLabel, TimeEstimate,
};
use im::OrdMap;
use serde::{Deserialize, Serialize};

/// Outcome of the completion check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionStatus {
    pub is_valid: bool,
    /// Ids of required questions without a recorded response.
    pub unanswered: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CompletionStatus {
    pub fn missing_count(&self) -> usize {
        self.unanswered.len()
    }
}

/// Check that every required (non-freeform) question has a response.
/// Freeform questions never block validity, answered or not.
pub fn validate_completion(responses: &OrdMap<u32, u8>) -> CompletionStatus {
    let unanswered: Vec<u32> = questions::required_question_ids()
        .filter(|id| !responses.contains_key(id))
        .collect();

    if unanswered.is_empty() {
        CompletionStatus {
            is_valid: true,
            unanswered,
            error: None,
        }
    } else {
        let error = format!(
            "Please answer all questions before completing the assessment. Missing: {} question(s).",
            unanswered.len()
        );
        CompletionStatus {
            is_valid: false,
            unanswered,
            error: Some(error),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreLabels {
    pub terrain: ScoreLabel,
    pub coherence: ScoreLabel,
}

/// The complete scored assessment. Immutable once computed; serializes to
/// the snapshot/submission wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResults {
    pub terrain_score: f64,
    pub coherence_score: f64,
    pub dimensional_scores: DimensionalScores,
    pub phase: Phase,
    pub time_estimate: TimeEstimate,
    pub multiplier: f64,
    pub score_labels: ScoreLabels,
}

/// Run all scoring stages over a response snapshot.
pub fn calculate_results(responses: &OrdMap<u32, u8>, policy: PhasePolicy) -> AssessmentResults {
    let dimensional_scores = calculate_dimensional_scores(responses);
    let terrain = terrain_score(&dimensional_scores);
    let coherence = coherence_score(&dimensional_scores);
    let phase = assign_phase(&dimensional_scores, policy);
    let time_estimate = estimate_time(phase, &dimensional_scores, policy);
    let multiplier = severity_multiplier(gate_score(phase, &dimensional_scores, policy));

    log::debug!(
        "scored assessment: terrain={:.1} coherence={:.1} phase={}",
        terrain,
        coherence,
        phase.label()
    );

    AssessmentResults {
        terrain_score: terrain,
        coherence_score: coherence,
        dimensional_scores,
        phase,
        time_estimate,
        multiplier,
        score_labels: ScoreLabels {
            terrain: terrain_label(terrain),
            coherence: coherence_label(coherence),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn validation_counts_missing_required_questions() {
        let mut responses = OrdMap::new();
        responses.insert(1, 2u8);
        responses.insert(2, 2u8);
        let status = validate_completion(&responses);
        assert!(!status.is_valid);
        assert_eq!(status.missing_count(), 23);
        assert!(status.error.as_deref().unwrap().contains("23 question(s)"));
    }

    #[test]
    fn freeform_answer_is_never_required() {
        let mut responses = OrdMap::new();
        for id in crate::questions::required_question_ids() {
            responses.insert(id, 2u8);
        }
        // Question 26 (freeform) deliberately absent.
        let status = validate_completion(&responses);
        assert!(status.is_valid);
        assert_eq!(status.missing_count(), 0);
        assert_eq!(status.error, None);
    }

    #[test]
    fn results_serialize_with_wire_field_names() {
        let mut responses = OrdMap::new();
        for id in crate::questions::required_question_ids() {
            responses.insert(id, 2u8);
        }
        let results = calculate_results(&responses, PhasePolicy::MinTriple);
        let json = serde_json::to_value(&results).unwrap();
        assert!(json.get("terrainScore").is_some());
        assert!(json.get("coherenceScore").is_some());
        assert!(json.get("dimensionalScores").is_some());
        assert!(json["dimensionalScores"].get("D1").is_some());
        assert!(json.get("timeEstimate").is_some());

        let back: AssessmentResults = serde_json::from_value(json).unwrap();
        assert_eq!(back, results);
    }
}
