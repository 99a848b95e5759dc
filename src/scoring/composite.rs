//! Composite scores: fixed weighted combinations of dimensional scores.

use super::dimensions::DimensionalScores;

/// Terrain score weights: D1 30%, D2 25%, D4 25%, D5 20%.
///
/// Weights sum to 1.0, so the composite stays inside [0, 100] without
/// clamping. Missing data simply drags the composite down through the
/// zero-scored dimension; there is no renormalization.
pub fn terrain_score(scores: &DimensionalScores) -> f64 {
    scores.d1 * 0.30 + scores.d2 * 0.25 + scores.d4 * 0.25 + scores.d5 * 0.20
}

/// Coherence score weights: D2 50%, D6 50%.
pub fn coherence_score(scores: &DimensionalScores) -> f64 {
    scores.d2 * 0.50 + scores.d6 * 0.50
}
