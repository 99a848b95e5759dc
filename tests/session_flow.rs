//! End-to-end session flow: record, persist, reload, score, submit payload.

use coherence_assessment::scoring::PhasePolicy;
use coherence_assessment::state::AssessmentState;
use coherence_assessment::storage::{self, StoredAssessment};
use coherence_assessment::{questions, submit};

#[test]
fn full_session_survives_a_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = storage::storage_path(Some(dir.path()));

    let mut state = AssessmentState::new();
    state.start();
    for (i, id) in questions::required_question_ids().enumerate() {
        state.set_response(id, (i % 5) as u8);
        state.next_question(PhasePolicy::MinTriple);
    }
    state.set_freeform_response(26, "long covid history");
    storage::save(&state, &path).unwrap();

    let mut reloaded = storage::load(&path);
    assert_eq!(reloaded, state);
    assert!(reloaded.complete(PhasePolicy::MinTriple));
    storage::save(&reloaded, &path).unwrap();

    let scored = storage::load(&path);
    assert!(scored.is_complete);
    let results = scored.results.as_ref().unwrap();
    assert!(results.terrain_score >= 0.0 && results.terrain_score <= 100.0);

    // The submission content carries results plus both response maps.
    let content = submit::submission_content(&scored).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed["freeformResponses"]["26"], "long covid history");
    assert_eq!(
        parsed["responses"].as_object().unwrap().len(),
        questions::required_question_ids().count()
    );
}

#[test]
fn documented_snapshot_shape_is_accepted() {
    // The persisted layout is a compatibility contract: camelCase keys,
    // responses as [id, value] pairs, RFC3339 start time.
    let raw = r#"{
        "currentQuestion": 3,
        "isComplete": false,
        "startTime": "2026-01-15T08:30:00Z",
        "responses": [[1, 2], [2, 4], [3, 0]],
        "freeformResponses": [[26, "notes"]],
        "results": null
    }"#;

    let stored: StoredAssessment = serde_json::from_str(raw).unwrap();
    let state: AssessmentState = stored.into();
    assert_eq!(state.current_question, 3);
    assert_eq!(state.response(2), Some(4));
    assert_eq!(state.freeform_response(26), Some("notes"));
    assert!(state.start_time.is_some());
    assert!(!state.validate_completion().is_valid);
}

#[test]
fn partial_snapshot_fills_defaults() {
    let stored: StoredAssessment = serde_json::from_str("{}").unwrap();
    let state: AssessmentState = stored.into();
    assert_eq!(state, AssessmentState::new());
}
