//! Dimensional aggregation: raw Likert responses → eight 0-100 sub-scores.

use crate::questions::{self, MAX_RESPONSE};
use im::OrdMap;
use serde::{Deserialize, Serialize};

/// The eight assessment dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    D1,
    D2,
    D3,
    D4,
    D5,
    D6,
    D7,
    D8,
}

impl Dimension {
    pub const ALL: [Dimension; 8] = [
        Dimension::D1,
        Dimension::D2,
        Dimension::D3,
        Dimension::D4,
        Dimension::D5,
        Dimension::D6,
        Dimension::D7,
        Dimension::D8,
    ];

    /// Human-readable construct name.
    pub fn name(&self) -> &'static str {
        match self {
            Dimension::D1 => "Exit Readiness",
            Dimension::D2 => "Mental Override",
            Dimension::D3 => "Oscillatory Capacity",
            Dimension::D4 => "Terrain Flexibility",
            Dimension::D5 => "Charge Reserve",
            Dimension::D6 => "Coherence Synchrony",
            Dimension::D7 => "Stuckness Pattern",
            Dimension::D8 => "Environmental Load",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Dimension::D1 => "D1",
            Dimension::D2 => "D2",
            Dimension::D3 => "D3",
            Dimension::D4 => "D4",
            Dimension::D5 => "D5",
            Dimension::D6 => "D6",
            Dimension::D7 => "D7",
            Dimension::D8 => "D8",
        }
    }
}

/// One 0-100 score per dimension.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DimensionalScores {
    #[serde(rename = "D1")]
    pub d1: f64,
    #[serde(rename = "D2")]
    pub d2: f64,
    #[serde(rename = "D3")]
    pub d3: f64,
    #[serde(rename = "D4")]
    pub d4: f64,
    #[serde(rename = "D5")]
    pub d5: f64,
    #[serde(rename = "D6")]
    pub d6: f64,
    #[serde(rename = "D7")]
    pub d7: f64,
    #[serde(rename = "D8")]
    pub d8: f64,
}

impl DimensionalScores {
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::D1 => self.d1,
            Dimension::D2 => self.d2,
            Dimension::D3 => self.d3,
            Dimension::D4 => self.d4,
            Dimension::D5 => self.d5,
            Dimension::D6 => self.d6,
            Dimension::D7 => self.d7,
            Dimension::D8 => self.d8,
        }
    }

    pub fn set(&mut self, dimension: Dimension, value: f64) {
        match dimension {
            Dimension::D1 => self.d1 = value,
            Dimension::D2 => self.d2 = value,
            Dimension::D3 => self.d3 = value,
            Dimension::D4 => self.d4 = value,
            Dimension::D5 => self.d5 = value,
            Dimension::D6 => self.d6 = value,
            Dimension::D7 => self.d7 = value,
            Dimension::D8 => self.d8 = value,
        }
    }

    /// Minimum score over a set of dimensions.
    pub fn min_of(&self, dimensions: &[Dimension]) -> f64 {
        dimensions
            .iter()
            .map(|d| self.get(*d))
            .fold(f64::INFINITY, f64::min)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL.into_iter().map(move |d| (d, self.get(d)))
    }
}

/// Points a single answered question contributes, with reverse scoring applied.
fn question_points(reverse: bool, response: u8) -> u8 {
    if reverse {
        MAX_RESPONSE - response
    } else {
        response
    }
}

/// Aggregate the response map into dimensional scores.
///
/// For each dimension: every listed non-freeform question adds 4 to the
/// attainable maximum whether or not it was answered; answered questions add
/// their (possibly reverse-scored) points. A dimension with nothing answered
/// scores 0, never an error.
pub fn calculate_dimensional_scores(responses: &OrdMap<u32, u8>) -> DimensionalScores {
    let mut scores = DimensionalScores::default();

    for dimension in Dimension::ALL {
        let mut total: u32 = 0;
        let mut max_possible: u32 = 0;

        for &qid in questions::contributing_questions(dimension) {
            let Some(question) = questions::question_by_id(qid) else {
                continue;
            };
            if question.is_freeform() {
                continue;
            }
            max_possible += u32::from(MAX_RESPONSE);
            if let Some(&response) = responses.get(&qid) {
                total += u32::from(question_points(question.reverse, response));
            }
        }

        let value = if max_possible > 0 {
            f64::from(total) / f64::from(max_possible) * 100.0
        } else {
            0.0
        };
        scores.set(dimension, value);
    }

    scores
}
