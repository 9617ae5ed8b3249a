use crate::dto::attempt_dto::{AttemptResultResponse, SubmitAttemptRequest};
use crate::error::{Error, Result};
use crate::models::test_attempt::{NewTestAttempt, TestAttempt};
use crate::services::scoring;
use crate::store::EntityStore;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Grades submissions and persists the resulting immutable attempt
/// records. Duplicate submissions are not deduplicated; each one becomes
/// its own attempt.
#[derive(Clone)]
pub struct AttemptService {
    store: Arc<dyn EntityStore>,
}

impl AttemptService {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn submit(
        &self,
        test_id: i32,
        req: SubmitAttemptRequest,
        time_taken_seconds: i32,
    ) -> Result<AttemptResultResponse> {
        let test = self
            .store
            .get_test(test_id)
            .await?
            .ok_or_else(|| Error::NotFound("Test not found".to_string()))?;

        // Reject malformed payloads before any scoring or persistence.
        let answers: HashMap<String, String> = serde_json::from_str(&req.answers_json)
            .map_err(|_| Error::BadRequest("Invalid answers format".to_string()))?;

        let bank = self.store.list_questions(test_id).await?;
        let summary = scoring::score_submission(&bank, &answers);

        let attempt = self
            .store
            .insert_attempt(NewTestAttempt {
                test_id,
                student_name: req.student_name,
                student_email: req.student_email,
                student_phone: req.student_phone,
                score: summary.score,
                total_marks: summary.total_marks,
                correct_answers: summary.correct,
                wrong_answers: summary.wrong,
                unanswered: summary.unanswered,
                time_taken_seconds,
                answers_json: Some(req.answers_json),
            })
            .await?;

        info!(
            attempt_id = attempt.id,
            test_id,
            score = summary.score,
            total_marks = summary.total_marks,
            "attempt graded"
        );

        Ok(AttemptResultResponse {
            id: attempt.id,
            score: summary.score,
            total_marks: summary.total_marks,
            correct_answers: summary.correct,
            wrong_answers: summary.wrong,
            unanswered: summary.unanswered,
            percentage: summary.percentage(),
            passed: summary.score >= test.passing_marks,
        })
    }

    pub async fn list(&self, test_id: Option<i32>) -> Result<Vec<TestAttempt>> {
        self.store.list_attempts(test_id).await
    }
}
