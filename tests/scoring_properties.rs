//! Property tests over the scoring invariants.

use coherence_assessment::scoring::{
    assign_phase, calculate_dimensional_scores, coherence_score, estimate_time, terrain_score,
    Phase, PhasePolicy,
};
use coherence_assessment::state::AssessmentState;
use im::OrdMap;
use proptest::prelude::*;

fn arbitrary_responses() -> impl Strategy<Value = OrdMap<u32, u8>> {
    // Any subset of the 25 required questions, each answered 0-4.
    prop::collection::btree_map(1u32..=25, 0u8..=4, 0..=25)
        .prop_map(|m| m.into_iter().collect())
}

proptest! {
    #[test]
    fn dimensional_scores_stay_bounded(responses in arbitrary_responses()) {
        let scores = calculate_dimensional_scores(&responses);
        for (_, value) in scores.iter() {
            prop_assert!((0.0..=100.0).contains(&value));
        }
    }

    #[test]
    fn composites_stay_bounded(responses in arbitrary_responses()) {
        let scores = calculate_dimensional_scores(&responses);
        let terrain = terrain_score(&scores);
        let coherence = coherence_score(&scores);
        prop_assert!((0.0..=100.0).contains(&terrain));
        prop_assert!((0.0..=100.0).contains(&coherence));
    }

    #[test]
    fn time_estimates_are_positive_ordered_ranges(
        responses in arbitrary_responses(),
        policy in prop_oneof![Just(PhasePolicy::MinTriple), Just(PhasePolicy::SingleGate)],
    ) {
        let scores = calculate_dimensional_scores(&responses);
        let phase = assign_phase(&scores, policy);
        let estimate = estimate_time(phase, &scores, policy);
        prop_assert!(estimate.min >= 1);
        prop_assert!(estimate.max > estimate.min);
    }

    #[test]
    fn classifier_always_lands_on_a_phase(responses in arbitrary_responses()) {
        let scores = calculate_dimensional_scores(&responses);
        let phase = assign_phase(&scores, PhasePolicy::MinTriple);
        prop_assert!(Phase::ALL.contains(&phase));
    }

    #[test]
    fn invalid_values_never_change_response_count(
        question_id in 1u32..=26,
        value in 5u8..=255,
    ) {
        let mut state = AssessmentState::new();
        state.set_response(1, 2);
        let before = state.responses.len();
        prop_assert!(!state.set_response(question_id, value));
        prop_assert_eq!(state.responses.len(), before);
        prop_assert_eq!(state.response(1), Some(2));
    }
}
