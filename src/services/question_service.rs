use crate::dto::test_dto::{CreateQuestionPayload, UpdateQuestionPayload};
use crate::error::{Error, Result};
use crate::models::mcq_question::{McqQuestion, OPTION_LETTERS};
use crate::store::EntityStore;
use std::sync::Arc;
use tracing::{info, warn};

/// Question CRUD plus the aggregate maintenance that keeps
/// `mcq_tests.total_questions`/`total_marks` in step with the bank.
///
/// Aggregates are adjusted by delta in a single atomic store operation,
/// so concurrent question mutations against one test cannot lose each
/// other's contribution. A failed adjustment after a successful question
/// write is logged and left for [`reconcile_all`](Self::reconcile_all);
/// the question write always wins.
#[derive(Clone)]
pub struct QuestionService {
    store: Arc<dyn EntityStore>,
}

impl QuestionService {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, payload: CreateQuestionPayload) -> Result<McqQuestion> {
        validate_option_letter(&payload.correct_option)?;
        if payload.marks < 1 {
            return Err(Error::BadRequest("marks must be a positive integer".into()));
        }
        if self.store.get_test(payload.test_id).await?.is_none() {
            return Err(Error::BadRequest(format!(
                "test_id {} references a nonexistent test",
                payload.test_id
            )));
        }

        let question = self.store.insert_question(payload.into_new()).await?;
        self.apply_aggregate_delta(question.test_id, 1, question.marks)
            .await;
        Ok(question)
    }

    pub async fn update(&self, id: i32, payload: UpdateQuestionPayload) -> Result<McqQuestion> {
        if let Some(letter) = &payload.correct_option {
            validate_option_letter(letter)?;
        }
        if matches!(payload.marks, Some(m) if m < 1) {
            return Err(Error::BadRequest("marks must be a positive integer".into()));
        }

        let old = self
            .store
            .get_question(id)
            .await?
            .ok_or_else(|| Error::NotFound("Question not found".to_string()))?;
        let updated = self
            .store
            .update_question(id, payload.into_patch())
            .await?
            .ok_or_else(|| Error::NotFound("Question not found".to_string()))?;

        // Count is unaffected by an update; only a marks change moves the
        // total_marks cache.
        let marks_delta = updated.marks - old.marks;
        if marks_delta != 0 {
            self.apply_aggregate_delta(updated.test_id, 0, marks_delta)
                .await;
        }
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<McqQuestion> {
        let removed = self
            .store
            .delete_question(id)
            .await?
            .ok_or_else(|| Error::NotFound("Question not found".to_string()))?;
        self.apply_aggregate_delta(removed.test_id, -1, -removed.marks)
            .await;
        Ok(removed)
    }

    pub async fn list_for_test(&self, test_id: i32) -> Result<Vec<McqQuestion>> {
        self.store.list_questions(test_id).await
    }

    /// Full rescan-and-fix of every test's cached aggregates. Returns the
    /// number of tests corrected.
    pub async fn reconcile_all(&self) -> Result<usize> {
        let mut fixed = 0;
        for test in self.store.list_all_tests().await? {
            let bank = self.store.list_questions(test.id).await?;
            let total_questions = bank.len() as i32;
            let total_marks: i32 = bank.iter().map(|q| q.marks).sum();
            if test.total_questions != total_questions || test.total_marks != total_marks {
                info!(
                    test_id = test.id,
                    stale_questions = test.total_questions,
                    stale_marks = test.total_marks,
                    total_questions,
                    total_marks,
                    "repairing drifted test aggregates"
                );
                self.store
                    .set_test_aggregates(test.id, total_questions, total_marks)
                    .await?;
                fixed += 1;
            }
        }
        Ok(fixed)
    }

    async fn apply_aggregate_delta(&self, test_id: i32, question_delta: i32, marks_delta: i32) {
        match self
            .store
            .adjust_test_aggregates(test_id, question_delta, marks_delta)
            .await
        {
            Ok(true) => {}
            Ok(false) => {
                warn!(test_id, "aggregate update skipped: parent test no longer exists");
            }
            Err(e) => {
                warn!(
                    test_id,
                    error = ?e,
                    "aggregate update failed after question write; reconciler will repair"
                );
            }
        }
    }
}

fn validate_option_letter(letter: &str) -> Result<()> {
    if OPTION_LETTERS.contains(&letter.to_lowercase().as_str()) {
        Ok(())
    } else {
        Err(Error::BadRequest(format!(
            "correct_option must be one of a, b, c, d (got {:?})",
            letter
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::mcq_question::NewMcqQuestion;
    use crate::models::mcq_test::McqTest;
    use crate::store::MockEntityStore;
    use chrono::Utc;

    fn sample_test(id: i32) -> McqTest {
        McqTest {
            id,
            test_series_id: 1,
            title: "Sample".into(),
            description: None,
            total_questions: 0,
            questions_to_show: 10,
            total_marks: 0,
            passing_marks: 0,
            duration_minutes: 60,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn sample_question(id: i32, test_id: i32, marks: i32) -> McqQuestion {
        McqQuestion {
            id,
            test_id,
            question_text: "q".into(),
            option_a: "1".into(),
            option_b: "2".into(),
            option_c: "3".into(),
            option_d: "4".into(),
            correct_option: "a".into(),
            marks,
            explanation: None,
            order_index: 0,
        }
    }

    fn create_payload(test_id: i32) -> CreateQuestionPayload {
        CreateQuestionPayload {
            test_id,
            question_text: "q".into(),
            option_a: "1".into(),
            option_b: "2".into(),
            option_c: "3".into(),
            option_d: "4".into(),
            correct_option: "a".into(),
            marks: 2,
            explanation: None,
            order_index: 0,
        }
    }

    #[tokio::test]
    async fn create_rejects_missing_parent_test() {
        let mut store = MockEntityStore::new();
        store.expect_get_test().returning(|_| Ok(None));
        store.expect_insert_question().never();

        let svc = QuestionService::new(Arc::new(store));
        let err = svc.create(create_payload(42)).await.unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
    }

    #[tokio::test]
    async fn create_rejects_bad_option_letter() {
        let store = MockEntityStore::new();
        let svc = QuestionService::new(Arc::new(store));
        let mut payload = create_payload(1);
        payload.correct_option = "e".into();
        let err = svc.create(payload).await.unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
    }

    #[tokio::test]
    async fn question_write_wins_when_aggregate_update_fails() {
        let mut store = MockEntityStore::new();
        store
            .expect_get_test()
            .returning(|id| Ok(Some(sample_test(id))));
        store
            .expect_insert_question()
            .returning(|new: NewMcqQuestion| Ok(sample_question(7, new.test_id, new.marks)));
        store
            .expect_adjust_test_aggregates()
            .returning(|_, _, _| Err(Error::Unavailable("store down".into())));

        let svc = QuestionService::new(Arc::new(store));
        let question = svc.create(create_payload(1)).await.expect("question kept");
        assert_eq!(question.id, 7);
    }

    #[tokio::test]
    async fn update_adjusts_marks_by_delta_only() {
        let mut store = MockEntityStore::new();
        store
            .expect_get_question()
            .returning(|id| Ok(Some(sample_question(id, 1, 2))));
        store
            .expect_update_question()
            .returning(|id, _| Ok(Some(sample_question(id, 1, 5))));
        store
            .expect_adjust_test_aggregates()
            .withf(|test_id, dq, dm| *test_id == 1 && *dq == 0 && *dm == 3)
            .times(1)
            .returning(|_, _, _| Ok(true));

        let svc = QuestionService::new(Arc::new(store));
        let payload = UpdateQuestionPayload {
            question_text: None,
            option_a: None,
            option_b: None,
            option_c: None,
            option_d: None,
            correct_option: None,
            marks: Some(5),
            explanation: None,
            order_index: None,
        };
        let updated = svc.update(3, payload).await.unwrap();
        assert_eq!(updated.marks, 5);
    }
}
