//! Tool configuration, loaded from `.coherence-assessment.toml`.
//!
//! Every field has a default, so the file is optional. An unreadable or
//! invalid file falls back to defaults with a warning rather than aborting.

use crate::scoring::PhasePolicy;
use crate::submit::DEFAULT_ENDPOINT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".coherence-assessment.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentConfig {
    /// Which phase classification policy to score with.
    #[serde(default)]
    pub phase_policy: PhasePolicy,

    /// Endpoint for result submission.
    #[serde(default = "default_endpoint")]
    pub submission_endpoint: String,

    /// Override for the snapshot directory; platform data dir when unset.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            phase_policy: PhasePolicy::default(),
            submission_endpoint: default_endpoint(),
            data_dir: None,
        }
    }
}

impl AssessmentConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !self.submission_endpoint.starts_with("http://")
            && !self.submission_endpoint.starts_with("https://")
        {
            return Err(format!(
                "submission_endpoint must be an http(s) URL, got '{}'",
                self.submission_endpoint
            ));
        }
        Ok(())
    }
}

fn parse_and_validate(contents: &str) -> Result<AssessmentConfig, String> {
    let config = toml::from_str::<AssessmentConfig>(contents)
        .map_err(|e| format!("failed to parse {CONFIG_FILE}: {e}"))?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from an explicit path, failing loudly. Used when the
/// caller named the file and silence would hide a typo.
pub fn try_load_config(path: &Path) -> Result<AssessmentConfig, crate::error::AssessmentError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| crate::error::AssessmentError::config(path, e.to_string()))?;
    parse_and_validate(&contents).map_err(|e| crate::error::AssessmentError::config(path, e))
}

/// Load configuration from an explicit path, or `.coherence-assessment.toml`
/// in the current directory. Missing file means defaults; a broken file is
/// reported and also means defaults.
pub fn load_config(path: Option<&Path>) -> AssessmentConfig {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(err) => {
            if err.kind() != std::io::ErrorKind::NotFound {
                log::warn!("failed to read {}: {}", path.display(), err);
            }
            return AssessmentConfig::default();
        }
    };

    match parse_and_validate(&contents) {
        Ok(config) => {
            log::debug!("loaded config from {}", path.display());
            config
        }
        Err(err) => {
            log::warn!("{err}; using defaults");
            AssessmentConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse_and_validate("").unwrap();
        assert_eq!(config, AssessmentConfig::default());
        assert_eq!(config.phase_policy, PhasePolicy::MinTriple);
    }

    #[test]
    fn policy_parses_from_kebab_case() {
        let config = parse_and_validate("phase_policy = \"single-gate\"").unwrap();
        assert_eq!(config.phase_policy, PhasePolicy::SingleGate);
    }

    #[test]
    fn bad_endpoint_is_rejected() {
        let err = parse_and_validate("submission_endpoint = \"ftp://nope\"").unwrap_err();
        assert!(err.contains("http(s)"));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(Some(&dir.path().join("absent.toml")));
        assert_eq!(config, AssessmentConfig::default());
    }

    #[test]
    fn explicit_config_path_fails_loudly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "submission_endpoint = \"ftp://x\"").unwrap();
        assert!(try_load_config(&path).is_err());
        assert!(try_load_config(&dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn broken_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "phase_policy = 42").unwrap();
        let config = load_config(Some(&path));
        assert_eq!(config, AssessmentConfig::default());
    }
}
