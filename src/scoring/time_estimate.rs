//! Time estimation: severity-scaled base time with banded uncertainty.

use super::dimensions::DimensionalScores;
use super::phase::{gate_dimensions, Phase, PhasePolicy};
use serde::{Deserialize, Serialize};

/// Gate score used when a phase needs no severity scaling (phase 1). Feeds
/// the multiplier formula to yield exactly 1.
const GATE_SENTINEL: f64 = 80.0;

/// Estimated duration range in whole weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEstimate {
    pub min: u32,
    pub max: u32,
}

/// Severity multiplier: `(1 + (80 - score) / 30)^2`.
///
/// 80 maps to 1, 50 to 4, 20 to 9. Scores above 80 would shrink the estimate
/// slightly; they are left as-is since the formula stays positive across the
/// 0-100 input range.
pub fn severity_multiplier(gate_score: f64) -> f64 {
    let base = 1.0 + (GATE_SENTINEL - gate_score) / 30.0;
    base * base
}

/// Minimum of the phase's gate dimension scores, or the sentinel for phase 1.
pub fn gate_score(phase: Phase, scores: &DimensionalScores, policy: PhasePolicy) -> f64 {
    let gates = gate_dimensions(phase, policy);
    if gates.is_empty() {
        GATE_SENTINEL
    } else {
        scores.min_of(gates)
    }
}

/// Uncertainty band around an exact time, in weeks: `(lower, upper)`.
///
/// The deep-collapse band is deliberately asymmetric (-3/+4): severe cases
/// regress slower than they can improve.
fn uncertainty_band(exact_weeks: f64) -> (f64, f64) {
    if exact_weeks <= 3.0 {
        (0.5, 0.5)
    } else if exact_weeks <= 6.0 {
        (1.0, 1.0)
    } else if exact_weeks <= 10.0 {
        (2.0, 2.0)
    } else if exact_weeks <= 15.0 {
        (3.0, 3.0)
    } else {
        (3.0, 4.0)
    }
}

/// Estimate the recovery time range for a phase.
///
/// `min` is floored at 1 week; zero or negative durations are never returned.
pub fn estimate_time(phase: Phase, scores: &DimensionalScores, policy: PhasePolicy) -> TimeEstimate {
    let multiplier = severity_multiplier(gate_score(phase, scores, policy));
    let exact = phase.base_time_weeks() * multiplier;
    let (lower, upper) = uncertainty_band(exact);

    TimeEstimate {
        min: ((exact - lower).round().max(1.0)) as u32,
        max: (exact + upper).round() as u32,
    }
}
