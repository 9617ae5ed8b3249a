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
use chrono::Utc;
use tokio::sync::RwLock;

use super::EntityStore;

#[derive(Default)]
struct Collections {
    classes: Vec<AcademicClass>,
    subjects: Vec<Subject>,
    series: Vec<TestSeries>,
    pdfs: Vec<PdfResource>,
    tests: Vec<McqTest>,
    questions: Vec<McqQuestion>,
    attempts: Vec<TestAttempt>,
    courses: Vec<Course>,
    next_id: i32,
}

impl Collections {
    fn assign_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory store used by the test suite and for running the server
/// without Postgres. One lock guards all collections, so the aggregate
/// adjustment is a single critical section.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn insert_class(&self, new: NewAcademicClass) -> Result<AcademicClass> {
        let mut inner = self.inner.write().await;
        let class = AcademicClass {
            id: inner.assign_id(),
            name: new.name,
            display_name: new.display_name,
            board: new.board,
            order_index: new.order_index,
            is_active: new.is_active,
        };
        inner.classes.push(class.clone());
        Ok(class)
    }

    async fn list_classes(&self) -> Result<Vec<AcademicClass>> {
        let inner = self.inner.read().await;
        let mut out: Vec<_> = inner.classes.iter().filter(|c| c.is_active).cloned().collect();
        out.sort_by_key(|c| (c.order_index, c.id));
        Ok(out)
    }

    async fn get_class(&self, id: i32) -> Result<Option<AcademicClass>> {
        let inner = self.inner.read().await;
        Ok(inner.classes.iter().find(|c| c.id == id).cloned())
    }

    async fn insert_subject(&self, new: NewSubject) -> Result<Subject> {
        let mut inner = self.inner.write().await;
        let subject = Subject {
            id: inner.assign_id(),
            class_id: new.class_id,
            name: new.name,
            icon: new.icon,
            color: new.color,
            order_index: new.order_index,
            is_active: new.is_active,
        };
        inner.subjects.push(subject.clone());
        Ok(subject)
    }

    async fn list_subjects(&self, class_id: Option<i32>) -> Result<Vec<Subject>> {
        let inner = self.inner.read().await;
        let mut out: Vec<_> = inner
            .subjects
            .iter()
            .filter(|s| s.is_active && class_id.map_or(true, |cid| s.class_id == cid))
            .cloned()
            .collect();
        out.sort_by_key(|s| (s.order_index, s.id));
        Ok(out)
    }

    async fn get_subject(&self, id: i32) -> Result<Option<Subject>> {
        let inner = self.inner.read().await;
        Ok(inner.subjects.iter().find(|s| s.id == id).cloned())
    }

    async fn insert_series(&self, new: NewTestSeries) -> Result<TestSeries> {
        let mut inner = self.inner.write().await;
        let series = TestSeries {
            id: inner.assign_id(),
            subject_id: new.subject_id,
            title: new.title,
            description: new.description,
            is_free: new.is_free,
            price: new.price,
            order_index: new.order_index,
            is_active: new.is_active,
            created_at: Utc::now(),
        };
        inner.series.push(series.clone());
        Ok(series)
    }

    async fn list_series(&self, subject_id: Option<i32>) -> Result<Vec<TestSeries>> {
        let inner = self.inner.read().await;
        let mut out: Vec<_> = inner
            .series
            .iter()
            .filter(|s| s.is_active && subject_id.map_or(true, |sid| s.subject_id == sid))
            .cloned()
            .collect();
        out.sort_by_key(|s| (s.order_index, s.id));
        Ok(out)
    }

    async fn get_series(&self, id: i32) -> Result<Option<TestSeries>> {
        let inner = self.inner.read().await;
        Ok(inner.series.iter().find(|s| s.id == id).cloned())
    }

    async fn delete_series(&self, id: i32) -> Result<bool> {
        let mut inner = self.inner.write().await;
        let before = inner.series.len();
        inner.series.retain(|s| s.id != id);
        Ok(inner.series.len() < before)
    }

    async fn insert_pdf(&self, new: NewPdfResource) -> Result<PdfResource> {
        let mut inner = self.inner.write().await;
        let pdf = PdfResource {
            id: inner.assign_id(),
            test_series_id: new.test_series_id,
            title: new.title,
            description: new.description,
            file_url: new.file_url,
            file_size: new.file_size,
            download_count: 0,
            is_active: new.is_active,
            created_at: Utc::now(),
        };
        inner.pdfs.push(pdf.clone());
        Ok(pdf)
    }

    async fn list_pdfs(&self, series_id: Option<i32>) -> Result<Vec<PdfResource>> {
        let inner = self.inner.read().await;
        let mut out: Vec<_> = inner
            .pdfs
            .iter()
            .filter(|p| p.is_active && series_id.map_or(true, |sid| p.test_series_id == sid))
            .cloned()
            .collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(out)
    }

    async fn delete_pdf(&self, id: i32) -> Result<bool> {
        let mut inner = self.inner.write().await;
        let before = inner.pdfs.len();
        inner.pdfs.retain(|p| p.id != id);
        Ok(inner.pdfs.len() < before)
    }

    async fn insert_test(&self, new: NewMcqTest) -> Result<McqTest> {
        let mut inner = self.inner.write().await;
        let test = McqTest {
            id: inner.assign_id(),
            test_series_id: new.test_series_id,
            title: new.title,
            description: new.description,
            total_questions: 0,
            questions_to_show: new.questions_to_show,
            total_marks: 0,
            passing_marks: new.passing_marks,
            duration_minutes: new.duration_minutes,
            is_active: new.is_active,
            created_at: Utc::now(),
        };
        inner.tests.push(test.clone());
        Ok(test)
    }

    async fn list_tests(&self, series_id: Option<i32>) -> Result<Vec<McqTest>> {
        let inner = self.inner.read().await;
        let mut out: Vec<_> = inner
            .tests
            .iter()
            .filter(|t| t.is_active && series_id.map_or(true, |sid| t.test_series_id == sid))
            .cloned()
            .collect();
        out.sort_by_key(|t| t.id);
        Ok(out)
    }

    async fn list_all_tests(&self) -> Result<Vec<McqTest>> {
        let inner = self.inner.read().await;
        let mut out = inner.tests.clone();
        out.sort_by_key(|t| t.id);
        Ok(out)
    }

    async fn get_test(&self, id: i32) -> Result<Option<McqTest>> {
        let inner = self.inner.read().await;
        Ok(inner.tests.iter().find(|t| t.id == id).cloned())
    }

    async fn update_test(&self, id: i32, patch: McqTestPatch) -> Result<Option<McqTest>> {
        let mut inner = self.inner.write().await;
        let Some(test) = inner.tests.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        if let Some(v) = patch.test_series_id {
            test.test_series_id = v;
        }
        if let Some(v) = patch.title {
            test.title = v;
        }
        if let Some(v) = patch.description {
            test.description = Some(v);
        }
        if let Some(v) = patch.questions_to_show {
            test.questions_to_show = v;
        }
        if let Some(v) = patch.passing_marks {
            test.passing_marks = v;
        }
        if let Some(v) = patch.duration_minutes {
            test.duration_minutes = v;
        }
        if let Some(v) = patch.is_active {
            test.is_active = v;
        }
        Ok(Some(test.clone()))
    }

    async fn delete_test(&self, id: i32) -> Result<bool> {
        let mut inner = self.inner.write().await;
        let before = inner.tests.len();
        inner.tests.retain(|t| t.id != id);
        if inner.tests.len() == before {
            return Ok(false);
        }
        inner.questions.retain(|q| q.test_id != id);
        Ok(true)
    }

    async fn adjust_test_aggregates(
        &self,
        test_id: i32,
        question_delta: i32,
        marks_delta: i32,
    ) -> Result<bool> {
        let mut inner = self.inner.write().await;
        match inner.tests.iter_mut().find(|t| t.id == test_id) {
            Some(test) => {
                test.total_questions += question_delta;
                test.total_marks += marks_delta;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn set_test_aggregates(
        &self,
        test_id: i32,
        total_questions: i32,
        total_marks: i32,
    ) -> Result<bool> {
        let mut inner = self.inner.write().await;
        match inner.tests.iter_mut().find(|t| t.id == test_id) {
            Some(test) => {
                test.total_questions = total_questions;
                test.total_marks = total_marks;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn insert_question(&self, new: NewMcqQuestion) -> Result<McqQuestion> {
        let mut inner = self.inner.write().await;
        let question = McqQuestion {
            id: inner.assign_id(),
            test_id: new.test_id,
            question_text: new.question_text,
            option_a: new.option_a,
            option_b: new.option_b,
            option_c: new.option_c,
            option_d: new.option_d,
            correct_option: new.correct_option,
            marks: new.marks,
            explanation: new.explanation,
            order_index: new.order_index,
        };
        inner.questions.push(question.clone());
        Ok(question)
    }

    async fn list_questions(&self, test_id: i32) -> Result<Vec<McqQuestion>> {
        let inner = self.inner.read().await;
        let mut out: Vec<_> = inner
            .questions
            .iter()
            .filter(|q| q.test_id == test_id)
            .cloned()
            .collect();
        out.sort_by_key(|q| (q.order_index, q.id));
        Ok(out)
    }

    async fn get_question(&self, id: i32) -> Result<Option<McqQuestion>> {
        let inner = self.inner.read().await;
        Ok(inner.questions.iter().find(|q| q.id == id).cloned())
    }

    async fn update_question(
        &self,
        id: i32,
        patch: McqQuestionPatch,
    ) -> Result<Option<McqQuestion>> {
        let mut inner = self.inner.write().await;
        let Some(q) = inner.questions.iter_mut().find(|q| q.id == id) else {
            return Ok(None);
        };
        if let Some(v) = patch.question_text {
            q.question_text = v;
        }
        if let Some(v) = patch.option_a {
            q.option_a = v;
        }
        if let Some(v) = patch.option_b {
            q.option_b = v;
        }
        if let Some(v) = patch.option_c {
            q.option_c = v;
        }
        if let Some(v) = patch.option_d {
            q.option_d = v;
        }
        if let Some(v) = patch.correct_option {
            q.correct_option = v;
        }
        if let Some(v) = patch.marks {
            q.marks = v;
        }
        if let Some(v) = patch.explanation {
            q.explanation = Some(v);
        }
        if let Some(v) = patch.order_index {
            q.order_index = v;
        }
        Ok(Some(q.clone()))
    }

    async fn delete_question(&self, id: i32) -> Result<Option<McqQuestion>> {
        let mut inner = self.inner.write().await;
        let pos = inner.questions.iter().position(|q| q.id == id);
        Ok(pos.map(|i| inner.questions.remove(i)))
    }

    async fn insert_attempt(&self, new: NewTestAttempt) -> Result<TestAttempt> {
        let mut inner = self.inner.write().await;
        let attempt = TestAttempt {
            id: inner.assign_id(),
            test_id: new.test_id,
            student_name: new.student_name,
            student_email: new.student_email,
            student_phone: new.student_phone,
            score: new.score,
            total_marks: new.total_marks,
            correct_answers: new.correct_answers,
            wrong_answers: new.wrong_answers,
            unanswered: new.unanswered,
            time_taken_seconds: new.time_taken_seconds,
            answers_json: new.answers_json,
            completed_at: Utc::now(),
        };
        inner.attempts.push(attempt.clone());
        Ok(attempt)
    }

    async fn list_attempts(&self, test_id: Option<i32>) -> Result<Vec<TestAttempt>> {
        let inner = self.inner.read().await;
        let mut out: Vec<_> = inner
            .attempts
            .iter()
            .filter(|a| test_id.map_or(true, |tid| a.test_id == tid))
            .cloned()
            .collect();
        out.sort_by_key(|a| std::cmp::Reverse(a.id));
        out.truncate(100);
        Ok(out)
    }

    async fn insert_course(&self, new: NewCourse) -> Result<Course> {
        let mut inner = self.inner.write().await;
        let course = Course {
            id: inner.assign_id(),
            title: new.title,
            description: new.description,
            class_id: new.class_id,
            is_free: new.is_free,
            price: new.price,
            duration: new.duration,
            lessons_count: new.lessons_count,
            instructor_name: new.instructor_name,
            order_index: new.order_index,
            is_active: new.is_active,
            created_at: Utc::now(),
        };
        inner.courses.push(course.clone());
        Ok(course)
    }

    async fn list_courses(&self, is_free: Option<bool>) -> Result<Vec<Course>> {
        let inner = self.inner.read().await;
        let mut out: Vec<_> = inner
            .courses
            .iter()
            .filter(|c| c.is_active && is_free.map_or(true, |f| c.is_free == f))
            .cloned()
            .collect();
        out.sort_by_key(|c| (c.order_index, c.id));
        Ok(out)
    }

    async fn get_course(&self, id: i32) -> Result<Option<Course>> {
        let inner = self.inner.read().await;
        Ok(inner.courses.iter().find(|c| c.id == id).cloned())
    }

    async fn update_course(&self, id: i32, patch: CoursePatch) -> Result<Option<Course>> {
        let mut inner = self.inner.write().await;
        let Some(c) = inner.courses.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        if let Some(v) = patch.title {
            c.title = v;
        }
        if let Some(v) = patch.description {
            c.description = v;
        }
        if let Some(v) = patch.class_id {
            c.class_id = Some(v);
        }
        if let Some(v) = patch.is_free {
            c.is_free = v;
        }
        if let Some(v) = patch.price {
            c.price = v;
        }
        if let Some(v) = patch.duration {
            c.duration = Some(v);
        }
        if let Some(v) = patch.lessons_count {
            c.lessons_count = v;
        }
        if let Some(v) = patch.instructor_name {
            c.instructor_name = Some(v);
        }
        if let Some(v) = patch.order_index {
            c.order_index = v;
        }
        if let Some(v) = patch.is_active {
            c.is_active = v;
        }
        Ok(Some(c.clone()))
    }

    async fn delete_course(&self, id: i32) -> Result<bool> {
        let mut inner = self.inner.write().await;
        let before = inner.courses.len();
        inner.courses.retain(|c| c.id != id);
        Ok(inner.courses.len() < before)
    }
}
