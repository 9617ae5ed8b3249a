use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Immutable record of one graded submission. An attempt stores its own
/// score/marks snapshot, so later edits to the question bank never change
/// historical results.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TestAttempt {
    pub id: i32,
    pub test_id: i32,
    pub student_name: String,
    pub student_email: Option<String>,
    pub student_phone: Option<String>,
    pub score: i32,
    pub total_marks: i32,
    pub correct_answers: i32,
    pub wrong_answers: i32,
    pub unanswered: i32,
    pub time_taken_seconds: i32,
    pub answers_json: Option<String>,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTestAttempt {
    pub test_id: i32,
    pub student_name: String,
    pub student_email: Option<String>,
    pub student_phone: Option<String>,
    pub score: i32,
    pub total_marks: i32,
    pub correct_answers: i32,
    pub wrong_answers: i32,
    pub unanswered: i32,
    pub time_taken_seconds: i32,
    pub answers_json: Option<String>,
}
