//! Pure scoring stages.
//!
//! Data flows strictly through the stages: dimensional aggregation,
//! composite scoring, phase classification, time estimation, label lookup.
//! Every function here is a pure function of its inputs and the static
//! catalog tables; no stage touches storage or I/O.

pub mod composite;
pub mod dimensions;
pub mod labels;
pub mod phase;
pub mod time_estimate;

pub use composite::{coherence_score, terrain_score};
pub use dimensions::{calculate_dimensional_scores, Dimension, DimensionalScores};
pub use labels::{coherence_label, terrain_label, ScoreBand, ScoreLabel};
pub use phase::{assign_phase, gate_dimensions, Phase, PhasePolicy};
pub use time_estimate::{estimate_time, gate_score, severity_multiplier, TimeEstimate};
