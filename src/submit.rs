//! One-shot remote submission of completed results.
//!
//! The payload wraps the results, responses and freeform responses as a JSON
//! string under `content`, keyed by the submitter's email. A non-2xx answer
//! is surfaced as an error; retrying is the caller's decision, never done
//! here, and a failed submission leaves local state untouched.

use crate::error::AssessmentError;
use crate::state::AssessmentState;
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://v2.oomo.health/api/v1/assessments";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct SubmissionBody {
    email: String,
    content: String,
}

/// Serialize the submission content: the results object with the raw
/// response maps merged in.
pub fn submission_content(state: &AssessmentState) -> Result<String, AssessmentError> {
    let results = state.results.as_ref().ok_or(AssessmentError::NoResults)?;

    let mut content = serde_json::to_value(results)?;
    let responses: BTreeMap<u32, u8> = state.responses.iter().map(|(k, v)| (*k, *v)).collect();
    let freeform: BTreeMap<u32, String> = state
        .freeform_responses
        .iter()
        .map(|(k, v)| (*k, v.clone()))
        .collect();
    content["responses"] = json!(responses);
    content["freeformResponses"] = json!(freeform);

    Ok(serde_json::to_string(&content)?)
}

/// POST the completed assessment to the endpoint. Best effort, one shot.
pub fn submit_results(
    endpoint: &str,
    email: &str,
    state: &AssessmentState,
) -> Result<(), AssessmentError> {
    let body = SubmissionBody {
        email: email.to_string(),
        content: submission_content(state)?,
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    let response = client.post(endpoint).json(&body).send()?;

    let status = response.status();
    if status.is_success() {
        log::info!("assessment submitted to {endpoint}");
        Ok(())
    } else {
        Err(AssessmentError::SubmissionStatus {
            status: status.as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions;
    use crate::scoring::PhasePolicy;

    #[test]
    fn content_requires_results() {
        let state = AssessmentState::new();
        assert!(matches!(
            submission_content(&state),
            Err(AssessmentError::NoResults)
        ));
    }

    #[test]
    fn content_merges_results_and_responses() {
        let mut state = AssessmentState::new();
        for id in questions::required_question_ids() {
            state.set_response(id, 2);
        }
        state.set_freeform_response(26, "notes");
        state.complete(PhasePolicy::MinTriple);

        let content = submission_content(&state).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert!(parsed.get("terrainScore").is_some());
        assert!(parsed.get("phase").is_some());
        assert_eq!(parsed["responses"]["1"], 2);
        assert_eq!(parsed["freeformResponses"]["26"], "notes");
    }
}
