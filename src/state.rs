//! Session state envelope and response recording.
//!
//! The state object is passed explicitly to and from the engine functions;
//! the scoring stages themselves never see it. Response maps are `im`
//! ordered maps, so snapshots handed to the engine are cheap structural
//! copies.

use crate::engine::{self, AssessmentResults, CompletionStatus};
use crate::questions::{self, Question, MAX_RESPONSE};
use crate::scoring::PhasePolicy;
use chrono::{DateTime, Utc};
use im::OrdMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssessmentState {
    /// Zero-based index into the question catalog.
    pub current_question: usize,
    pub is_complete: bool,
    pub start_time: Option<DateTime<Utc>>,
    pub responses: OrdMap<u32, u8>,
    pub freeform_responses: OrdMap<u32, String>,
    pub results: Option<AssessmentResults>,
    pub error: Option<String>,
}

impl AssessmentState {
    pub fn new() -> Self {
        Self::default()
    }

    // --- navigation ---

    pub fn current_question(&self) -> &'static Question {
        // Bounds are maintained by the navigation methods; fall back to the
        // last question rather than panicking on a stale snapshot.
        let index = self.current_question.min(questions::total_questions() - 1);
        &questions::QUESTIONS[index]
    }

    pub fn total_questions(&self) -> usize {
        questions::total_questions()
    }

    /// 1-based progress through the catalog, 0-100.
    pub fn progress_percentage(&self) -> f64 {
        (self.current_question + 1) as f64 / questions::total_questions() as f64 * 100.0
    }

    /// Jump to a question index. Out-of-range indices are ignored.
    pub fn set_current_question(&mut self, index: usize) {
        if index < questions::total_questions() {
            self.current_question = index;
        }
    }

    /// Advance to the next question; at the last question, attempt
    /// completion instead. Returns whether the state changed.
    pub fn next_question(&mut self, policy: PhasePolicy) -> bool {
        if self.current_question < questions::total_questions() - 1 {
            self.current_question += 1;
            true
        } else {
            self.complete(policy)
        }
    }

    pub fn previous_question(&mut self) {
        self.current_question = self.current_question.saturating_sub(1);
    }

    /// Reset everything and stamp a fresh start time.
    pub fn start(&mut self) {
        *self = AssessmentState::new();
        self.start_time = Some(Utc::now());
    }

    // --- responses ---

    /// Record a Likert response. Values outside 0..=4 are rejected without
    /// mutating anything; the return value reports whether the response was
    /// accepted (callers on the public surface typically discard it).
    pub fn set_response(&mut self, question_id: u32, value: u8) -> bool {
        if value > MAX_RESPONSE || questions::question_by_id(question_id).is_none() {
            return false;
        }
        self.responses.insert(question_id, value);
        true
    }

    pub fn response(&self, question_id: u32) -> Option<u8> {
        self.responses.get(&question_id).copied()
    }

    /// Record freeform text, trimmed.
    pub fn set_freeform_response(&mut self, question_id: u32, text: &str) {
        self.freeform_responses
            .insert(question_id, text.trim().to_string());
    }

    pub fn freeform_response(&self, question_id: u32) -> Option<&str> {
        self.freeform_responses.get(&question_id).map(String::as_str)
    }

    pub fn is_question_answered(&self, question_id: u32) -> bool {
        match questions::question_by_id(question_id) {
            // Freeform questions are optional and always count as answered.
            Some(q) if q.is_freeform() => true,
            Some(q) => self.responses.contains_key(&q.id),
            None => false,
        }
    }

    // --- completion ---

    pub fn validate_completion(&self) -> CompletionStatus {
        engine::validate_completion(&self.responses)
    }

    /// Validate and, if complete, compute and store results. On validation
    /// failure the error message is recorded and any prior results are left
    /// untouched.
    pub fn complete(&mut self, policy: PhasePolicy) -> bool {
        let validation = self.validate_completion();
        if !validation.is_valid {
            self.error = validation.error;
            return false;
        }

        self.is_complete = true;
        self.results = Some(engine::calculate_results(&self.responses, policy));
        self.error = None;
        true
    }
}
