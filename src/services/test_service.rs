use crate::dto::test_dto::{CreateTestPayload, UpdateTestPayload};
use crate::error::{Error, Result};
use crate::models::mcq_question::McqQuestion;
use crate::models::mcq_test::McqTest;
use crate::store::EntityStore;
use rand::seq::SliceRandom;
use std::sync::Arc;

/// A test plus the question set chosen for the caller. `total_in_bank`
/// always reports the true bank size, independent of how many questions
/// were selected.
#[derive(Debug, Clone)]
pub struct AssembledTest {
    pub test: McqTest,
    pub questions: Vec<McqQuestion>,
    pub total_in_bank: usize,
}

#[derive(Clone)]
pub struct TestService {
    store: Arc<dyn EntityStore>,
}

impl TestService {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, payload: CreateTestPayload) -> Result<McqTest> {
        if self.store.get_series(payload.test_series_id).await?.is_none() {
            return Err(Error::BadRequest(format!(
                "test_series_id {} references a nonexistent series",
                payload.test_series_id
            )));
        }
        self.store.insert_test(payload.into_new()).await
    }

    pub async fn update(&self, id: i32, payload: UpdateTestPayload) -> Result<McqTest> {
        self.store
            .update_test(id, payload.into_patch())
            .await?
            .ok_or_else(|| Error::NotFound("Test not found".to_string()))
    }

    /// Removes the test and its entire question bank.
    pub async fn delete(&self, id: i32) -> Result<()> {
        if self.store.delete_test(id).await? {
            Ok(())
        } else {
            Err(Error::NotFound("Test not found".to_string()))
        }
    }

    pub async fn list(&self, series_id: Option<i32>) -> Result<Vec<McqTest>> {
        self.store.list_tests(series_id).await
    }

    pub async fn get(&self, id: i32) -> Result<McqTest> {
        self.store
            .get_test(id)
            .await?
            .ok_or_else(|| Error::NotFound("Test not found".to_string()))
    }

    /// Test Assembly: admin mode returns the full ordered bank; learner
    /// mode draws an unseeded uniform random sample without replacement,
    /// sized by `questions_to_show`, whenever the bank is larger than
    /// that. Pure read; nothing is mutated.
    pub async fn read_detail(&self, test_id: i32, admin: bool) -> Result<AssembledTest> {
        let test = self.get(test_id).await?;
        let bank = self.store.list_questions(test_id).await?;
        let total_in_bank = bank.len();

        let sample_size = test.sample_size();
        let questions = if admin || bank.len() <= sample_size {
            bank
        } else {
            let mut rng = rand::thread_rng();
            bank.choose_multiple(&mut rng, sample_size).cloned().collect()
        };

        Ok(AssembledTest {
            test,
            questions,
            total_in_bank,
        })
    }
}
