//! Descriptive label lookup for composite scores.
//!
//! Pure bucket lookup: five inclusive-lower-bound ranges, with distinct
//! content tables for the terrain and coherence composites.

use serde::{Deserialize, Serialize};

/// Score bucket, keyed by inclusive lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScoreBand {
    #[serde(rename = "0-19")]
    Lowest,
    #[serde(rename = "20-39")]
    Low,
    #[serde(rename = "40-59")]
    Mid,
    #[serde(rename = "60-79")]
    High,
    #[serde(rename = "80-100")]
    Highest,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreBand::Highest
        } else if score >= 60.0 {
            ScoreBand::High
        } else if score >= 40.0 {
            ScoreBand::Mid
        } else if score >= 20.0 {
            ScoreBand::Low
        } else {
            ScoreBand::Lowest
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ScoreBand::Lowest => "0-19",
            ScoreBand::Low => "20-39",
            ScoreBand::Mid => "40-59",
            ScoreBand::High => "60-79",
            ScoreBand::Highest => "80-100",
        }
    }
}

/// Display content attached to a score bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLabel {
    pub emoji: String,
    pub label: String,
    pub description: String,
}

impl ScoreLabel {
    fn new(emoji: &str, label: &str, description: &str) -> Self {
        ScoreLabel {
            emoji: emoji.to_string(),
            label: label.to_string(),
            description: description.to_string(),
        }
    }
}

/// Label for a terrain composite score.
pub fn terrain_label(score: f64) -> ScoreLabel {
    match ScoreBand::from_score(score) {
        ScoreBand::Lowest => ScoreLabel::new(
            "🟥",
            "Dysfunction",
            "Your body is protecting itself.\nThis score reflects a system under significant internal strain. You may not feel terrible all the time — but at the cellular level, your terrain is likely stuck, congested, or collapsing under load.\n\nThat's not failure. It's your body safely limiting change until conditions improve.\n\nThis is the hardest phase to see clearly, but also the most essential to start. Once exits unblock and pressure softens, healing becomes possible again.",
        ),
        ScoreBand::Low => ScoreLabel::new(
            "🟧",
            "Low Capacity",
            "Your terrain is overloaded.\nThis score shows your system is still working through some combination of congestion, rigidity, depletion, or timing misalignment. These create functional blockages — not just symptoms — that make it hard to adapt to even helpful inputs.\n\nThat doesn't mean your body isn't trying. It means it's holding the line until conditions are safer.\n\nWe begin by clearing space — so your system can stop protecting and start responding.",
        ),
        ScoreBand::Mid => ScoreLabel::new(
            "🟨",
            "Transitional State",
            "You're close — but still blocked.\nThis score reflects a system that has pieces in place, but one or more bottlenecks are still dragging down your overall readiness. That might be drainage, charge, override, or structural stuckness.\n\nYou don't need to overhaul everything. But you do need targeted sequencing — supporting what's ready, while softening what's not.\n\nThis is where momentum builds — if you work with your terrain, not against it.",
        ),
        ScoreBand::High => ScoreLabel::new(
            "🟩",
            "Emerging Stability",
            "Your system is beginning to stabilize.\nThis score reflects a terrain with improving coherence, charge, and flexibility — strong enough to take on more input, but not yet fully locked in. One or two systems may still wobble under stress.\n\nThe key now is integration: making sure signal clarity and rhythm hold under real-world complexity.\n\nThis is where the work gets smarter, not harder.",
        ),
        ScoreBand::Highest => ScoreLabel::new(
            "🟦",
            "Readiness",
            "Your system is capable of receiving.\nThis score reflects a terrain with strong signs of coherence, open exits, buffered charge, and stable rhythms.\n\nThat doesn't guarantee everything is optimal — but it does suggest your body is ready to amplify healing, not resist it.\n\nThis is where health becomes expansive. The work ahead is to sustain that state under stress, deepen system flexibility, and eventually support others still on their way.",
        ),
    }
}

/// Label for a coherence composite score.
pub fn coherence_label(score: f64) -> ScoreLabel {
    match ScoreBand::from_score(score) {
        ScoreBand::Lowest => ScoreLabel::new(
            "🌘",
            "Disconnected",
            "Severely fragmented rhythms; likely misaligned from light, food, and sleep cycles.",
        ),
        ScoreBand::Low => ScoreLabel::new(
            "🌀",
            "Desynchronized",
            "Some patterns exist, but timing is unstable or frequently overridden.",
        ),
        ScoreBand::Mid => ScoreLabel::new(
            "🌗",
            "Re-patterning",
            "Daily rhythms are forming, but still fragile or inconsistent under stress.",
        ),
        ScoreBand::High => ScoreLabel::new(
            "🌖",
            "Aligning",
            "Rhythm and override patterns are stabilizing — signal flow is becoming clearer.",
        ),
        ScoreBand::Highest => ScoreLabel::new(
            "🌕",
            "Synchronized",
            "Biological clocks and energetic cycles are coherent and well-aligned.",
        ),
    }
}
