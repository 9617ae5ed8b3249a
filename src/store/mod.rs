pub mod memory;
pub mod postgres;

use crate::error::Result;
use crate::models::academic_class::{AcademicClass, NewAcademicClass};
use crate::models::course::{Course, CoursePatch, NewCourse};
use crate::models::mcq_question::{McqQuestion, McqQuestionPatch, NewMcqQuestion};
use crate::models::mcq_test::{McqTest, McqTestPatch, NewMcqTest};
use crate::models::pdf_resource::{NewPdfResource, PdfResource};
use crate::models::subject::{NewSubject, Subject};
use crate::models::test_attempt::{NewTestAttempt, TestAttempt};
use crate::models::test_series::{NewTestSeries, TestSeries};
use async_trait::async_trait;

/// Persistence contract over a collection-of-records model: one logical
/// collection per entity type. Implementations assign identifiers, apply
/// patch-style updates, and keep soft-deleted rows out of list results.
///
/// Ordering: list methods sort by `order_index` (questions tie-broken by
/// id, i.e. insertion order); attempts are returned newest first.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntityStore: Send + Sync {
    // Academic classes (soft-deactivated, never hard-deleted)
    async fn insert_class(&self, new: NewAcademicClass) -> Result<AcademicClass>;
    async fn list_classes(&self) -> Result<Vec<AcademicClass>>;
    async fn get_class(&self, id: i32) -> Result<Option<AcademicClass>>;

    // Subjects
    async fn insert_subject(&self, new: NewSubject) -> Result<Subject>;
    async fn list_subjects(&self, class_id: Option<i32>) -> Result<Vec<Subject>>;
    async fn get_subject(&self, id: i32) -> Result<Option<Subject>>;

    // Test series
    async fn insert_series(&self, new: NewTestSeries) -> Result<TestSeries>;
    async fn list_series(&self, subject_id: Option<i32>) -> Result<Vec<TestSeries>>;
    async fn get_series(&self, id: i32) -> Result<Option<TestSeries>>;
    async fn delete_series(&self, id: i32) -> Result<bool>;

    // PDF resources
    async fn insert_pdf(&self, new: NewPdfResource) -> Result<PdfResource>;
    async fn list_pdfs(&self, series_id: Option<i32>) -> Result<Vec<PdfResource>>;
    async fn delete_pdf(&self, id: i32) -> Result<bool>;

    // MCQ tests
    async fn insert_test(&self, new: NewMcqTest) -> Result<McqTest>;
    async fn list_tests(&self, series_id: Option<i32>) -> Result<Vec<McqTest>>;
    /// Includes inactive rows; used by the aggregate reconciler.
    async fn list_all_tests(&self) -> Result<Vec<McqTest>>;
    async fn get_test(&self, id: i32) -> Result<Option<McqTest>>;
    async fn update_test(&self, id: i32, patch: McqTestPatch) -> Result<Option<McqTest>>;
    /// Deletes the test and every question referencing it.
    async fn delete_test(&self, id: i32) -> Result<bool>;
    /// Atomically increments the cached aggregate fields. Returns false
    /// when the test does not exist.
    async fn adjust_test_aggregates(
        &self,
        test_id: i32,
        question_delta: i32,
        marks_delta: i32,
    ) -> Result<bool>;
    /// Overwrites the cached aggregates; reconciliation only.
    async fn set_test_aggregates(
        &self,
        test_id: i32,
        total_questions: i32,
        total_marks: i32,
    ) -> Result<bool>;

    // MCQ questions
    async fn insert_question(&self, new: NewMcqQuestion) -> Result<McqQuestion>;
    async fn list_questions(&self, test_id: i32) -> Result<Vec<McqQuestion>>;
    async fn get_question(&self, id: i32) -> Result<Option<McqQuestion>>;
    async fn update_question(
        &self,
        id: i32,
        patch: McqQuestionPatch,
    ) -> Result<Option<McqQuestion>>;
    /// Returns the removed row so the caller can derive the aggregate delta.
    async fn delete_question(&self, id: i32) -> Result<Option<McqQuestion>>;

    // Test attempts (write-once)
    async fn insert_attempt(&self, new: NewTestAttempt) -> Result<TestAttempt>;
    async fn list_attempts(&self, test_id: Option<i32>) -> Result<Vec<TestAttempt>>;

    // Courses
    async fn insert_course(&self, new: NewCourse) -> Result<Course>;
    async fn list_courses(&self, is_free: Option<bool>) -> Result<Vec<Course>>;
    async fn get_course(&self, id: i32) -> Result<Option<Course>>;
    async fn update_course(&self, id: i32, patch: CoursePatch) -> Result<Option<Course>>;
    async fn delete_course(&self, id: i32) -> Result<bool>;
}
