//! Durable snapshot of the session state.
//!
//! One JSON file under a single fixed key. A missing or corrupt snapshot is
//! never an error for the caller: it logs a warning and resolves to the
//! empty state, matching the reset-on-corruption policy.

use crate::engine::AssessmentResults;
use crate::error::AssessmentError;
use crate::state::AssessmentState;
use chrono::{DateTime, Utc};
use im::OrdMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed storage key; also the snapshot file stem.
pub const STORAGE_KEY: &str = "coherence-assessment";

/// Wire shape of the persisted snapshot. Responses are stored as id/value
/// pairs so the JSON stays stable regardless of map implementation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredAssessment {
    #[serde(default)]
    pub current_question: usize,
    #[serde(default)]
    pub is_complete: bool,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub responses: Vec<(u32, u8)>,
    #[serde(default)]
    pub freeform_responses: Vec<(u32, String)>,
    #[serde(default)]
    pub results: Option<AssessmentResults>,
}

impl From<&AssessmentState> for StoredAssessment {
    fn from(state: &AssessmentState) -> Self {
        StoredAssessment {
            current_question: state.current_question,
            is_complete: state.is_complete,
            start_time: state.start_time,
            responses: state.responses.iter().map(|(k, v)| (*k, *v)).collect(),
            freeform_responses: state
                .freeform_responses
                .iter()
                .map(|(k, v)| (*k, v.clone()))
                .collect(),
            results: state.results.clone(),
        }
    }
}

impl From<StoredAssessment> for AssessmentState {
    fn from(stored: StoredAssessment) -> Self {
        AssessmentState {
            current_question: stored.current_question,
            is_complete: stored.is_complete,
            start_time: stored.start_time,
            responses: stored.responses.into_iter().collect::<OrdMap<u32, u8>>(),
            freeform_responses: stored.freeform_responses.into_iter().collect(),
            results: stored.results,
            error: None,
        }
    }
}

/// Snapshot file path under the given directory, or the platform data dir.
pub fn storage_path(data_dir: Option<&Path>) -> PathBuf {
    let base = data_dir.map(Path::to_path_buf).unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(STORAGE_KEY)
    });
    base.join(format!("{STORAGE_KEY}.json"))
}

/// Persist the state snapshot, creating parent directories as needed.
pub fn save(state: &AssessmentState, path: &Path) -> Result<(), AssessmentError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let snapshot = StoredAssessment::from(state);
    let json = serde_json::to_string_pretty(&snapshot)?;
    fs::write(path, json)?;
    log::debug!("saved assessment snapshot to {}", path.display());
    Ok(())
}

/// Load the state snapshot. Missing file yields the empty state; a corrupt
/// snapshot is logged and also resolves to the empty state.
pub fn load(path: &Path) -> AssessmentState {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => return AssessmentState::new(),
    };

    match serde_json::from_str::<StoredAssessment>(&raw) {
        Ok(stored) => stored.into(),
        Err(err) => {
            log::warn!(
                "discarding corrupt assessment snapshot at {}: {}",
                path.display(),
                err
            );
            AssessmentState::new()
        }
    }
}

/// Remove the snapshot file if present.
pub fn clear(path: &Path) -> Result<(), AssessmentError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err.into()),
    }
}
