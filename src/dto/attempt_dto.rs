use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Submission payload. `answers_json` is the raw string-encoded mapping of
/// question id to chosen option letter, exactly as the client assembled it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitAttemptRequest {
    #[validate(length(min = 1))]
    pub student_name: String,
    pub student_email: Option<String>,
    pub student_phone: Option<String>,
    #[validate(length(min = 1))]
    pub answers_json: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttemptResultResponse {
    pub id: i32,
    pub score: i32,
    pub total_marks: i32,
    pub correct_answers: i32,
    pub wrong_answers: i32,
    pub unanswered: i32,
    pub percentage: f64,
    pub passed: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitQuery {
    #[serde(default)]
    pub time_taken: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttemptListQuery {
    pub test_id: Option<i32>,
}
