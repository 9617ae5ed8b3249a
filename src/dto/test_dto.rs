use crate::models::mcq_question::{McqQuestion, McqQuestionPatch, NewMcqQuestion};
use crate::models::mcq_test::{McqTest, McqTestPatch, NewMcqTest, DEFAULT_QUESTIONS_TO_SHOW};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

fn default_true() -> bool {
    true
}

fn default_questions_to_show() -> i32 {
    DEFAULT_QUESTIONS_TO_SHOW
}

fn default_duration() -> i32 {
    60
}

fn default_marks() -> i32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTestPayload {
    pub test_series_id: i32,
    #[validate(length(min = 1))]
    pub title: String,
    pub description: Option<String>,
    #[serde(default = "default_questions_to_show")]
    pub questions_to_show: i32,
    #[serde(default)]
    pub passing_marks: i32,
    #[serde(default = "default_duration")]
    pub duration_minutes: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl CreateTestPayload {
    pub fn into_new(self) -> NewMcqTest {
        NewMcqTest {
            test_series_id: self.test_series_id,
            title: self.title,
            description: self.description,
            questions_to_show: self.questions_to_show,
            passing_marks: self.passing_marks,
            duration_minutes: self.duration_minutes,
            is_active: self.is_active,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTestPayload {
    pub test_series_id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub questions_to_show: Option<i32>,
    pub passing_marks: Option<i32>,
    pub duration_minutes: Option<i32>,
    pub is_active: Option<bool>,
}

impl UpdateTestPayload {
    pub fn into_patch(self) -> McqTestPatch {
        McqTestPatch {
            test_series_id: self.test_series_id,
            title: self.title,
            description: self.description,
            questions_to_show: self.questions_to_show,
            passing_marks: self.passing_marks,
            duration_minutes: self.duration_minutes,
            is_active: self.is_active,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionPayload {
    pub test_id: i32,
    #[validate(length(min = 1))]
    pub question_text: String,
    #[validate(length(min = 1))]
    pub option_a: String,
    #[validate(length(min = 1))]
    pub option_b: String,
    #[validate(length(min = 1))]
    pub option_c: String,
    #[validate(length(min = 1))]
    pub option_d: String,
    #[validate(length(min = 1))]
    pub correct_option: String,
    #[serde(default = "default_marks")]
    pub marks: i32,
    pub explanation: Option<String>,
    #[serde(default)]
    pub order_index: i32,
}

impl CreateQuestionPayload {
    pub fn into_new(self) -> NewMcqQuestion {
        NewMcqQuestion {
            test_id: self.test_id,
            question_text: self.question_text,
            option_a: self.option_a,
            option_b: self.option_b,
            option_c: self.option_c,
            option_d: self.option_d,
            correct_option: self.correct_option.to_lowercase(),
            marks: self.marks,
            explanation: self.explanation,
            order_index: self.order_index,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateQuestionPayload {
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

impl UpdateQuestionPayload {
    pub fn into_patch(self) -> McqQuestionPatch {
        McqQuestionPatch {
            question_text: self.question_text,
            option_a: self.option_a,
            option_b: self.option_b,
            option_c: self.option_c,
            option_d: self.option_d,
            correct_option: self.correct_option.map(|o| o.to_lowercase()),
            marks: self.marks,
            explanation: self.explanation,
            order_index: self.order_index,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestReadQuery {
    #[serde(default)]
    pub admin: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestListQuery {
    pub test_series_id: Option<i32>,
}

/// Learner-facing question shape: the answer key and explanation stay
/// server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearnerQuestion {
    pub id: i32,
    pub test_id: i32,
    pub question_text: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub marks: i32,
    pub order_index: i32,
}

impl From<McqQuestion> for LearnerQuestion {
    fn from(q: McqQuestion) -> Self {
        Self {
            id: q.id,
            test_id: q.test_id,
            question_text: q.question_text,
            option_a: q.option_a,
            option_b: q.option_b,
            option_c: q.option_c,
            option_d: q.option_d,
            marks: q.marks,
            order_index: q.order_index,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminTestDetailResponse {
    #[serde(flatten)]
    pub test: McqTest,
    pub questions: Vec<McqQuestion>,
    pub total_questions_in_bank: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct LearnerTestDetailResponse {
    #[serde(flatten)]
    pub test: McqTest,
    pub questions: Vec<LearnerQuestion>,
    pub total_questions_in_bank: usize,
}
