//! Phase classification: ordered threshold rules over dimensional scores.
//!
//! Two decision policies exist; both are first-match-wins short-circuit
//! chains. [`PhasePolicy::MinTriple`] is the default: each rule tests the
//! minimum of three dimensions against a fixed threshold. The alternative
//! [`PhasePolicy::SingleGate`] tests one dimension per rule.

use super::dimensions::{Dimension, DimensionalScores};
use serde::{Deserialize, Serialize};

/// Ordinal phase labels, earliest (most impaired) first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[serde(rename = "0.1")]
    Exits,
    #[serde(rename = "0.2")]
    Fascia,
    #[serde(rename = "0.3")]
    Override,
    #[serde(rename = "0.4")]
    Charge,
    #[serde(rename = "1")]
    Integration,
}

impl Phase {
    pub const ALL: [Phase; 5] = [
        Phase::Exits,
        Phase::Fascia,
        Phase::Override,
        Phase::Charge,
        Phase::Integration,
    ];

    /// Ordinal label as shown to users ("0.1" .. "1").
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Exits => "0.1",
            Phase::Fascia => "0.2",
            Phase::Override => "0.3",
            Phase::Charge => "0.4",
            Phase::Integration => "1",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Phase::Exits => "Exits",
            Phase::Fascia => "Fascia",
            Phase::Override => "Override",
            Phase::Charge => "Charge",
            Phase::Integration => "Integration",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Phase::Exits => {
                "Focus on clearing exit pathways - bile flow, digestion, elimination, and fascia drainage."
            }
            Phase::Fascia => {
                "Unlock fascia pliability, improve microcirculation, and restore movement-induced flow."
            }
            Phase::Override => {
                "Address signal suppression, trauma loops, and false resilience patterns."
            }
            Phase::Charge => {
                "Build sustainable energy reserves and optimize mitochondrial function."
            }
            Phase::Integration => {
                "Advanced integration of all systems with full coherence and adaptability."
            }
        }
    }

    /// Base recovery time in weeks, before severity scaling.
    pub fn base_time_weeks(&self) -> f64 {
        match self {
            Phase::Exits => 2.5,
            Phase::Fascia => 2.0,
            Phase::Override => 1.5,
            Phase::Charge => 2.0,
            Phase::Integration => 4.0,
        }
    }
}

/// Which rule set classifies the phase and gates the time estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhasePolicy {
    /// Min-of-three-dimensions rules with threshold <= 63.
    #[default]
    MinTriple,
    /// Single-dimension rules with threshold < 68.
    SingleGate,
}

/// Rule threshold for [`PhasePolicy::MinTriple`]: a triple matches when its
/// minimum is at or below this.
const TRIPLE_THRESHOLD: f64 = 63.0;

/// Rule threshold for [`PhasePolicy::SingleGate`]: a dimension matches when
/// strictly below this.
const SINGLE_THRESHOLD: f64 = 68.0;

/// Ordered classification rules for the min-triple policy.
const TRIPLE_RULES: [([Dimension; 3], Phase); 4] = [
    ([Dimension::D1, Dimension::D8, Dimension::D5], Phase::Exits),
    ([Dimension::D1, Dimension::D4, Dimension::D6], Phase::Fascia),
    ([Dimension::D2, Dimension::D7, Dimension::D3], Phase::Override),
    ([Dimension::D4, Dimension::D7, Dimension::D6], Phase::Charge),
];

/// Ordered classification rules for the single-gate policy.
const SINGLE_RULES: [(Dimension, Phase); 4] = [
    (Dimension::D1, Phase::Exits),
    (Dimension::D4, Phase::Fascia),
    (Dimension::D2, Phase::Override),
    (Dimension::D5, Phase::Charge),
];

/// Assign a phase. The first satisfied rule in fixed order wins; later rules
/// are never consulted once one matches. No rule matching means phase 1.
pub fn assign_phase(scores: &DimensionalScores, policy: PhasePolicy) -> Phase {
    match policy {
        PhasePolicy::MinTriple => TRIPLE_RULES
            .iter()
            .find(|(triple, _)| scores.min_of(triple) <= TRIPLE_THRESHOLD)
            .map(|(_, phase)| *phase)
            .unwrap_or(Phase::Integration),
        PhasePolicy::SingleGate => SINGLE_RULES
            .iter()
            .find(|(dimension, _)| scores.get(*dimension) < SINGLE_THRESHOLD)
            .map(|(_, phase)| *phase)
            .unwrap_or(Phase::Integration),
    }
}

/// Dimensions whose minimum gates the time estimate for a phase.
///
/// Under the min-triple policy these are not always the classification
/// triples: phase 0.4 classifies on D4/D7/D6 but gates on D5/D6/D7.
/// Phase 1 has no gate; callers use the sentinel in [`super::time_estimate`].
pub fn gate_dimensions(phase: Phase, policy: PhasePolicy) -> &'static [Dimension] {
    match policy {
        PhasePolicy::MinTriple => match phase {
            Phase::Exits => &[Dimension::D1, Dimension::D8, Dimension::D5],
            Phase::Fascia => &[Dimension::D4, Dimension::D1, Dimension::D6],
            Phase::Override => &[Dimension::D2, Dimension::D3, Dimension::D7],
            Phase::Charge => &[Dimension::D5, Dimension::D6, Dimension::D7],
            Phase::Integration => &[],
        },
        PhasePolicy::SingleGate => match phase {
            Phase::Exits => &[Dimension::D1],
            Phase::Fascia => &[Dimension::D4],
            Phase::Override => &[Dimension::D2],
            Phase::Charge => &[Dimension::D5],
            Phase::Integration => &[],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(value: f64) -> DimensionalScores {
        DimensionalScores {
            d1: value,
            d2: value,
            d3: value,
            d4: value,
            d5: value,
            d6: value,
            d7: value,
            d8: value,
        }
    }

    #[test]
    fn healthy_scores_reach_integration() {
        let scores = uniform(100.0);
        assert_eq!(assign_phase(&scores, PhasePolicy::MinTriple), Phase::Integration);
        assert_eq!(assign_phase(&scores, PhasePolicy::SingleGate), Phase::Integration);
    }

    #[test]
    fn uniformly_low_scores_match_the_first_rule() {
        let scores = uniform(25.0);
        assert_eq!(assign_phase(&scores, PhasePolicy::MinTriple), Phase::Exits);
        assert_eq!(assign_phase(&scores, PhasePolicy::SingleGate), Phase::Exits);
    }

    #[test]
    fn earliest_matching_rule_wins() {
        // Both the 0.1 triple (via D8) and the 0.3 triple (via D7) are below
        // threshold; rule order must pick 0.1.
        let mut scores = uniform(90.0);
        scores.d8 = 40.0;
        scores.d7 = 40.0;
        assert_eq!(assign_phase(&scores, PhasePolicy::MinTriple), Phase::Exits);

        // Lift D8 back up; only the 0.3 triple still matches.
        scores.d8 = 90.0;
        assert_eq!(assign_phase(&scores, PhasePolicy::MinTriple), Phase::Override);
    }

    #[test]
    fn triple_threshold_is_inclusive() {
        let mut scores = uniform(90.0);
        scores.d5 = 63.0;
        assert_eq!(assign_phase(&scores, PhasePolicy::MinTriple), Phase::Exits);
        scores.d5 = 63.1;
        assert_eq!(assign_phase(&scores, PhasePolicy::MinTriple), Phase::Integration);
    }

    #[test]
    fn single_gate_threshold_is_exclusive() {
        let mut scores = uniform(90.0);
        scores.d4 = 68.0;
        assert_eq!(assign_phase(&scores, PhasePolicy::SingleGate), Phase::Integration);
        scores.d4 = 67.9;
        assert_eq!(assign_phase(&scores, PhasePolicy::SingleGate), Phase::Fascia);
    }

    #[test]
    fn single_gate_order_is_fixed() {
        let mut scores = uniform(90.0);
        scores.d4 = 50.0;
        scores.d2 = 50.0;
        assert_eq!(assign_phase(&scores, PhasePolicy::SingleGate), Phase::Fascia);
    }

    #[test]
    fn phase_metadata_is_complete() {
        for phase in Phase::ALL {
            assert!(!phase.name().is_empty());
            assert!(!phase.description().is_empty());
            assert!(phase.base_time_weeks() > 0.0);
        }
        assert_eq!(Phase::Exits.label(), "0.1");
        assert_eq!(Phase::Integration.label(), "1");
    }

    #[test]
    fn phases_order_by_severity() {
        assert!(Phase::Exits < Phase::Fascia);
        assert!(Phase::Charge < Phase::Integration);
    }

    #[test]
    fn charge_gate_differs_from_its_rule() {
        let gates = gate_dimensions(Phase::Charge, PhasePolicy::MinTriple);
        assert_eq!(gates, &[Dimension::D5, Dimension::D6, Dimension::D7]);
    }
}
