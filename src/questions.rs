//! Static question catalog and dimension mapping tables.
//!
//! The catalog is fixed at compile time: 25 Likert questions plus one
//! freeform question. A question may contribute to several dimensions
//! (e.g. question 3 counts toward both D1 and D7).

use crate::scoring::Dimension;
use serde::Serialize;

/// Likert answer labels, index == recorded response value.
pub const LIKERT_OPTIONS: [&str; 5] = ["Never", "Rarely", "Sometimes", "Often", "Almost Always"];

/// Highest accepted response value.
pub const MAX_RESPONSE: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Likert,
    Freeform,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub id: u32,
    pub text: &'static str,
    /// Dimensions this question contributes to; empty for freeform.
    pub dimensions: &'static [Dimension],
    /// Reverse-scored: a higher raw response indicates worse status.
    pub reverse: bool,
    pub kind: QuestionKind,
}

impl Question {
    pub fn is_freeform(&self) -> bool {
        self.kind == QuestionKind::Freeform
    }
}

use Dimension::*;
use QuestionKind::*;

macro_rules! q {
    ($id:expr, $text:expr, [$($dim:expr),*], reverse) => {
        Question { id: $id, text: $text, dimensions: &[$($dim),*], reverse: true, kind: Likert }
    };
    ($id:expr, $text:expr, [$($dim:expr),*]) => {
        Question { id: $id, text: $text, dimensions: &[$($dim),*], reverse: false, kind: Likert }
    };
}

pub static QUESTIONS: [Question; 26] = [
    q!(1, "How often do you feel bloated, heavy, or sluggish after eating?", [D1], reverse),
    q!(2, "How often do you have at least one complete, satisfying bowel movement per day?", [D1]),
    q!(3, "How often do you feel your digestion is \"stuck\" or incomplete?", [D1, D7], reverse),
    q!(4, "How often do you experience puffiness, swelling, or facial bloating in the morning?", [D1], reverse),
    q!(5, "How often do you feel overheated or flushed without sweating?", [D1, D5], reverse),
    q!(6, "How often do you feel congested (sinus, chest, lymph) even when you're not sick?", [D1, D8], reverse),
    q!(7, "How often do you push through fatigue or discomfort to meet deadlines or obligations?", [D2], reverse),
    q!(8, "How often do you feel guilt or anxiety when resting, even when your body is asking for it?", [D2, D7], reverse),
    q!(9, "How often do you stay up late or skip meals to finish tasks, even when you know it throws off your rhythm?", [D2, D6], reverse),
    q!(10, "How well do you maintain steady energy when you skip or delay a meal by a few hours?", [D3, D5]),
    q!(11, "How often do you struggle to bounce back after moderate physical activity or stress?", [D3, D5], reverse),
    q!(12, "How often do you feel depleted the next day after intense work or social demands?", [D3, D2], reverse),
    q!(13, "How often do you feel stress gets stuck in your body as tightness, aches, or shutdown during prolonged stressful periods?", [D4, D2, D7], reverse),
    q!(14, "How often do massages, foam rolling, or stretching feel unusually uncomfortable or blocked (beyond normal soreness)?", [D4], reverse),
    q!(15, "How often do you feel physically unsettled or uncomfortable when adjusting to new environments (e.g., beds, chairs, postures)?", [D4, D6], reverse),
    q!(16, "How often can you release areas of tension in your body (e.g., belly, hips, chest) just through breath or awareness—without needing to move or stretch?", [D4, D2]),
    q!(17, "How often do you feel like your body stays locked or tense long after stress has passed—even when you try to unwind it?", [D4, D2, D7], reverse),
    q!(18, "How often do you wake up tired or unrefreshed—regardless of how long you slept?", [D5], reverse),
    q!(19, "How often do you feel noticeably more energized after 20–30 minutes in natural sunlight?", [D5, D8]),
    q!(20, "How often do you feel your energy crash midday, regardless of how well you slept?", [D5], reverse),
    q!(21, "How often do you rely on caffeine, sugar, or stimulants to function or feel alert?", [D5], reverse),
    q!(22, "If you dim or reduce artificial lights after sunset, how often do you naturally feel sleepy within 1–2 hours?", [D6]),
    q!(23, "How often does your daily energy follow a steady rhythm—rising in the morning, peaking mid-day, and tapering at night?", [D6]),
    q!(24, "How consistently do you get exposure to early morning sunlight before 9am?", [D6, D8]),
    q!(25, "How often do you feel your day-to-day environment is noisy, chaotic, or overly stimulating (traffic, EMFs, people, pressure)?", [D8], reverse),
    Question {
        id: 26,
        text: "Is there anything else you'd like to share about your current health, terrain, or healing history?",
        dimensions: &[],
        reverse: false,
        kind: Freeform,
    },
];

/// Contributing question ids per dimension. Kept as an explicit table so the
/// aggregator never has to scan the catalog; a unit test checks it stays
/// consistent with the per-question dimension tags.
pub fn contributing_questions(dimension: Dimension) -> &'static [u32] {
    match dimension {
        Dimension::D1 => &[1, 2, 3, 4, 5, 6],
        Dimension::D2 => &[7, 8, 9, 12, 13, 16, 17],
        Dimension::D3 => &[10, 11, 12],
        Dimension::D4 => &[13, 14, 15, 16, 17],
        Dimension::D5 => &[5, 10, 11, 18, 19, 20, 21],
        Dimension::D6 => &[9, 15, 22, 23, 24],
        Dimension::D7 => &[3, 8, 13, 17],
        Dimension::D8 => &[6, 19, 24, 25],
    }
}

pub fn question_by_id(id: u32) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}

pub fn total_questions() -> usize {
    QUESTIONS.len()
}

/// Ids of every question that must be answered before scoring.
pub fn required_question_ids() -> impl Iterator<Item = u32> {
    QUESTIONS.iter().filter(|q| !q.is_freeform()).map(|q| q.id)
}
