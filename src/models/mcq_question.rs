use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const OPTION_LETTERS: [&str; 4] = ["a", "b", "c", "d"];

/// Owned exclusively by its test; deleted when the test is deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct McqQuestion {
    pub id: i32,
    pub test_id: i32,
    pub question_text: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    /// One of "a".."d", validated at the DTO boundary.
    pub correct_option: String,
    pub marks: i32,
    pub explanation: Option<String>,
    pub order_index: i32,
}

impl McqQuestion {
    /// Case-insensitive check of a submitted option letter.
    pub fn is_correct(&self, submitted: &str) -> bool {
        submitted.eq_ignore_ascii_case(&self.correct_option)
    }
}

#[derive(Debug, Clone)]
pub struct NewMcqQuestion {
    pub test_id: i32,
    pub question_text: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_option: String,
    pub marks: i32,
    pub explanation: Option<String>,
    pub order_index: i32,
}

#[derive(Debug, Clone, Default)]
pub struct McqQuestionPatch {
    pub question_text: Option<String>,
    pub option_a: Option<String>,
    pub option_b: Option<String>,
    pub option_c: Option<String>,
    pub option_d: Option<String>,
    pub correct_option: Option<String>,
    pub marks: Option<i32>,
    pub explanation: Option<String>,
    pub order_index: Option<i32>,
}
