use crate::config::get_config;
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
use sqlx::{postgres::PgPoolOptions, PgPool};

use super::EntityStore;

pub async fn create_pool() -> Result<PgPool> {
    let config = get_config();
    let pool = PgPoolOptions::new()
        .max_connections(50)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect(&config.database_url)
        .await?;
    Ok(pool)
}

/// Production store backed by Postgres. Queries are runtime-checked so the
/// crate builds without a live database.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const TEST_COLUMNS: &str = "id, test_series_id, title, description, total_questions, \
     questions_to_show, total_marks, passing_marks, duration_minutes, is_active, created_at";

const QUESTION_COLUMNS: &str = "id, test_id, question_text, option_a, option_b, option_c, \
     option_d, correct_option, marks, explanation, order_index";

#[async_trait]
impl EntityStore for PgStore {
    async fn insert_class(&self, new: NewAcademicClass) -> Result<AcademicClass> {
        let row = sqlx::query_as::<_, AcademicClass>(
            r#"
            INSERT INTO academic_classes (name, display_name, board, order_index, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, display_name, board, order_index, is_active
            "#,
        )
        .bind(&new.name)
        .bind(&new.display_name)
        .bind(&new.board)
        .bind(new.order_index)
        .bind(new.is_active)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_classes(&self) -> Result<Vec<AcademicClass>> {
        let rows = sqlx::query_as::<_, AcademicClass>(
            r#"
            SELECT id, name, display_name, board, order_index, is_active
            FROM academic_classes
            WHERE is_active = TRUE
            ORDER BY order_index, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_class(&self, id: i32) -> Result<Option<AcademicClass>> {
        let row = sqlx::query_as::<_, AcademicClass>(
            r#"
            SELECT id, name, display_name, board, order_index, is_active
            FROM academic_classes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert_subject(&self, new: NewSubject) -> Result<Subject> {
        let row = sqlx::query_as::<_, Subject>(
            r#"
            INSERT INTO subjects (class_id, name, icon, color, order_index, is_active)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, class_id, name, icon, color, order_index, is_active
            "#,
        )
        .bind(new.class_id)
        .bind(&new.name)
        .bind(&new.icon)
        .bind(&new.color)
        .bind(new.order_index)
        .bind(new.is_active)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_subjects(&self, class_id: Option<i32>) -> Result<Vec<Subject>> {
        let rows = sqlx::query_as::<_, Subject>(
            r#"
            SELECT id, class_id, name, icon, color, order_index, is_active
            FROM subjects
            WHERE is_active = TRUE
              AND ($1::int4 IS NULL OR class_id = $1)
            ORDER BY order_index, id
            "#,
        )
        .bind(class_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_subject(&self, id: i32) -> Result<Option<Subject>> {
        let row = sqlx::query_as::<_, Subject>(
            r#"
            SELECT id, class_id, name, icon, color, order_index, is_active
            FROM subjects
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert_series(&self, new: NewTestSeries) -> Result<TestSeries> {
        let row = sqlx::query_as::<_, TestSeries>(
            r#"
            INSERT INTO test_series (subject_id, title, description, is_free, price, order_index, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, subject_id, title, description, is_free, price, order_index, is_active, created_at
            "#,
        )
        .bind(new.subject_id)
        .bind(&new.title)
        .bind(&new.description)
        .bind(new.is_free)
        .bind(new.price)
        .bind(new.order_index)
        .bind(new.is_active)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_series(&self, subject_id: Option<i32>) -> Result<Vec<TestSeries>> {
        let rows = sqlx::query_as::<_, TestSeries>(
            r#"
            SELECT id, subject_id, title, description, is_free, price, order_index, is_active, created_at
            FROM test_series
            WHERE is_active = TRUE
              AND ($1::int4 IS NULL OR subject_id = $1)
            ORDER BY order_index, id
            "#,
        )
        .bind(subject_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_series(&self, id: i32) -> Result<Option<TestSeries>> {
        let row = sqlx::query_as::<_, TestSeries>(
            r#"
            SELECT id, subject_id, title, description, is_free, price, order_index, is_active, created_at
            FROM test_series
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_series(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM test_series WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn insert_pdf(&self, new: NewPdfResource) -> Result<PdfResource> {
        let row = sqlx::query_as::<_, PdfResource>(
            r#"
            INSERT INTO pdf_resources (test_series_id, title, description, file_url, file_size, is_active)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, test_series_id, title, description, file_url, file_size,
                      download_count, is_active, created_at
            "#,
        )
        .bind(new.test_series_id)
        .bind(&new.title)
        .bind(&new.description)
        .bind(&new.file_url)
        .bind(&new.file_size)
        .bind(new.is_active)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_pdfs(&self, series_id: Option<i32>) -> Result<Vec<PdfResource>> {
        let rows = sqlx::query_as::<_, PdfResource>(
            r#"
            SELECT id, test_series_id, title, description, file_url, file_size,
                   download_count, is_active, created_at
            FROM pdf_resources
            WHERE is_active = TRUE
              AND ($1::int4 IS NULL OR test_series_id = $1)
            ORDER BY created_at DESC, id
            "#,
        )
        .bind(series_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn delete_pdf(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM pdf_resources WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn insert_test(&self, new: NewMcqTest) -> Result<McqTest> {
        let row = sqlx::query_as::<_, McqTest>(&format!(
            r#"
            INSERT INTO mcq_tests (test_series_id, title, description, questions_to_show,
                                   passing_marks, duration_minutes, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {TEST_COLUMNS}
            "#,
        ))
        .bind(new.test_series_id)
        .bind(&new.title)
        .bind(&new.description)
        .bind(new.questions_to_show)
        .bind(new.passing_marks)
        .bind(new.duration_minutes)
        .bind(new.is_active)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_tests(&self, series_id: Option<i32>) -> Result<Vec<McqTest>> {
        let rows = sqlx::query_as::<_, McqTest>(&format!(
            r#"
            SELECT {TEST_COLUMNS}
            FROM mcq_tests
            WHERE is_active = TRUE
              AND ($1::int4 IS NULL OR test_series_id = $1)
            ORDER BY created_at, id
            "#,
        ))
        .bind(series_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_all_tests(&self) -> Result<Vec<McqTest>> {
        let rows = sqlx::query_as::<_, McqTest>(&format!(
            "SELECT {TEST_COLUMNS} FROM mcq_tests ORDER BY id",
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_test(&self, id: i32) -> Result<Option<McqTest>> {
        let row = sqlx::query_as::<_, McqTest>(&format!(
            "SELECT {TEST_COLUMNS} FROM mcq_tests WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update_test(&self, id: i32, patch: McqTestPatch) -> Result<Option<McqTest>> {
        let row = sqlx::query_as::<_, McqTest>(&format!(
            r#"
            UPDATE mcq_tests
            SET test_series_id = COALESCE($1, test_series_id),
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                questions_to_show = COALESCE($4, questions_to_show),
                passing_marks = COALESCE($5, passing_marks),
                duration_minutes = COALESCE($6, duration_minutes),
                is_active = COALESCE($7, is_active)
            WHERE id = $8
            RETURNING {TEST_COLUMNS}
            "#,
        ))
        .bind(patch.test_series_id)
        .bind(patch.title)
        .bind(patch.description)
        .bind(patch.questions_to_show)
        .bind(patch.passing_marks)
        .bind(patch.duration_minutes)
        .bind(patch.is_active)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_test(&self, id: i32) -> Result<bool> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM mcq_questions WHERE test_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM mcq_tests WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    async fn adjust_test_aggregates(
        &self,
        test_id: i32,
        question_delta: i32,
        marks_delta: i32,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE mcq_tests
            SET total_questions = total_questions + $1,
                total_marks = total_marks + $2
            WHERE id = $3
            "#,
        )
        .bind(question_delta)
        .bind(marks_delta)
        .bind(test_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn set_test_aggregates(
        &self,
        test_id: i32,
        total_questions: i32,
        total_marks: i32,
    ) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE mcq_tests SET total_questions = $1, total_marks = $2 WHERE id = $3",
        )
        .bind(total_questions)
        .bind(total_marks)
        .bind(test_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn insert_question(&self, new: NewMcqQuestion) -> Result<McqQuestion> {
        let row = sqlx::query_as::<_, McqQuestion>(&format!(
            r#"
            INSERT INTO mcq_questions (test_id, question_text, option_a, option_b, option_c,
                                       option_d, correct_option, marks, explanation, order_index)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {QUESTION_COLUMNS}
            "#,
        ))
        .bind(new.test_id)
        .bind(&new.question_text)
        .bind(&new.option_a)
        .bind(&new.option_b)
        .bind(&new.option_c)
        .bind(&new.option_d)
        .bind(&new.correct_option)
        .bind(new.marks)
        .bind(&new.explanation)
        .bind(new.order_index)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_questions(&self, test_id: i32) -> Result<Vec<McqQuestion>> {
        let rows = sqlx::query_as::<_, McqQuestion>(&format!(
            r#"
            SELECT {QUESTION_COLUMNS}
            FROM mcq_questions
            WHERE test_id = $1
            ORDER BY order_index, id
            "#,
        ))
        .bind(test_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_question(&self, id: i32) -> Result<Option<McqQuestion>> {
        let row = sqlx::query_as::<_, McqQuestion>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM mcq_questions WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update_question(
        &self,
        id: i32,
        patch: McqQuestionPatch,
    ) -> Result<Option<McqQuestion>> {
        let row = sqlx::query_as::<_, McqQuestion>(&format!(
            r#"
            UPDATE mcq_questions
            SET question_text = COALESCE($1, question_text),
                option_a = COALESCE($2, option_a),
                option_b = COALESCE($3, option_b),
                option_c = COALESCE($4, option_c),
                option_d = COALESCE($5, option_d),
                correct_option = COALESCE($6, correct_option),
                marks = COALESCE($7, marks),
                explanation = COALESCE($8, explanation),
                order_index = COALESCE($9, order_index)
            WHERE id = $10
            RETURNING {QUESTION_COLUMNS}
            "#,
        ))
        .bind(patch.question_text)
        .bind(patch.option_a)
        .bind(patch.option_b)
        .bind(patch.option_c)
        .bind(patch.option_d)
        .bind(patch.correct_option)
        .bind(patch.marks)
        .bind(patch.explanation)
        .bind(patch.order_index)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_question(&self, id: i32) -> Result<Option<McqQuestion>> {
        let row = sqlx::query_as::<_, McqQuestion>(&format!(
            "DELETE FROM mcq_questions WHERE id = $1 RETURNING {QUESTION_COLUMNS}",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert_attempt(&self, new: NewTestAttempt) -> Result<TestAttempt> {
        let row = sqlx::query_as::<_, TestAttempt>(
            r#"
            INSERT INTO test_attempts (test_id, student_name, student_email, student_phone,
                                       score, total_marks, correct_answers, wrong_answers,
                                       unanswered, time_taken_seconds, answers_json)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, test_id, student_name, student_email, student_phone, score,
                      total_marks, correct_answers, wrong_answers, unanswered,
                      time_taken_seconds, answers_json, completed_at
            "#,
        )
        .bind(new.test_id)
        .bind(&new.student_name)
        .bind(&new.student_email)
        .bind(&new.student_phone)
        .bind(new.score)
        .bind(new.total_marks)
        .bind(new.correct_answers)
        .bind(new.wrong_answers)
        .bind(new.unanswered)
        .bind(new.time_taken_seconds)
        .bind(&new.answers_json)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_attempts(&self, test_id: Option<i32>) -> Result<Vec<TestAttempt>> {
        let rows = sqlx::query_as::<_, TestAttempt>(
            r#"
            SELECT id, test_id, student_name, student_email, student_phone, score,
                   total_marks, correct_answers, wrong_answers, unanswered,
                   time_taken_seconds, answers_json, completed_at
            FROM test_attempts
            WHERE ($1::int4 IS NULL OR test_id = $1)
            ORDER BY id DESC
            LIMIT 100
            "#,
        )
        .bind(test_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn insert_course(&self, new: NewCourse) -> Result<Course> {
        let row = sqlx::query_as::<_, Course>(
            r#"
            INSERT INTO courses (title, description, class_id, is_free, price, duration,
                                 lessons_count, instructor_name, order_index, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, title, description, class_id, is_free, price, duration,
                      lessons_count, instructor_name, order_index, is_active, created_at
            "#,
        )
        .bind(&new.title)
        .bind(&new.description)
        .bind(new.class_id)
        .bind(new.is_free)
        .bind(new.price)
        .bind(&new.duration)
        .bind(new.lessons_count)
        .bind(&new.instructor_name)
        .bind(new.order_index)
        .bind(new.is_active)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_courses(&self, is_free: Option<bool>) -> Result<Vec<Course>> {
        let rows = sqlx::query_as::<_, Course>(
            r#"
            SELECT id, title, description, class_id, is_free, price, duration,
                   lessons_count, instructor_name, order_index, is_active, created_at
            FROM courses
            WHERE is_active = TRUE
              AND ($1::bool IS NULL OR is_free = $1)
            ORDER BY order_index, id
            "#,
        )
        .bind(is_free)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_course(&self, id: i32) -> Result<Option<Course>> {
        let row = sqlx::query_as::<_, Course>(
            r#"
            SELECT id, title, description, class_id, is_free, price, duration,
                   lessons_count, instructor_name, order_index, is_active, created_at
            FROM courses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update_course(&self, id: i32, patch: CoursePatch) -> Result<Option<Course>> {
        let row = sqlx::query_as::<_, Course>(
            r#"
            UPDATE courses
            SET title = COALESCE($1, title),
                description = COALESCE($2, description),
                class_id = COALESCE($3, class_id),
                is_free = COALESCE($4, is_free),
                price = COALESCE($5, price),
                duration = COALESCE($6, duration),
                lessons_count = COALESCE($7, lessons_count),
                instructor_name = COALESCE($8, instructor_name),
                order_index = COALESCE($9, order_index),
                is_active = COALESCE($10, is_active)
            WHERE id = $11
            RETURNING id, title, description, class_id, is_free, price, duration,
                      lessons_count, instructor_name, order_index, is_active, created_at
            "#,
        )
        .bind(patch.title)
        .bind(patch.description)
        .bind(patch.class_id)
        .bind(patch.is_free)
        .bind(patch.price)
        .bind(patch.duration)
        .bind(patch.lessons_count)
        .bind(patch.instructor_name)
        .bind(patch.order_index)
        .bind(patch.is_active)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_course(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
