//! Coherence assessment scoring engine.
//!
//! Presents a fixed 26-question self-assessment catalog (25 Likert, one
//! freeform) and scores completed responses deterministically: eight
//! dimensional sub-scores, two weighted composites (terrain, coherence), an
//! ordinal phase assignment and a banded recovery time estimate.
//!
//! The scoring stages in [`scoring`] are pure functions of a response
//! snapshot; session state, persistence and submission live in their own
//! modules and call into the engine, never the other way around.

pub mod config;
pub mod engine;
pub mod error;
pub mod questions;
pub mod scoring;
pub mod state;
pub mod storage;
pub mod submit;

pub use crate::config::{load_config, AssessmentConfig};
pub use crate::engine::{
    calculate_results, validate_completion, AssessmentResults, CompletionStatus,
};
pub use crate::error::AssessmentError;
pub use crate::questions::{Question, QuestionKind, LIKERT_OPTIONS, MAX_RESPONSE, QUESTIONS};
pub use crate::scoring::{
    assign_phase, calculate_dimensional_scores, coherence_score, estimate_time,
    severity_multiplier, terrain_score, Dimension, DimensionalScores, Phase, PhasePolicy,
    ScoreBand, ScoreLabel, TimeEstimate,
};
pub use crate::state::AssessmentState;
pub use crate::storage::{storage_path, StoredAssessment, STORAGE_KEY};
pub use crate::submit::{submit_results, DEFAULT_ENDPOINT};
