use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Standalone course offering; not coupled to the test/question aggregate.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Course {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub class_id: Option<i32>,
    pub is_free: bool,
    pub price: i32,
    pub duration: Option<String>,
    pub lessons_count: i32,
    pub instructor_name: Option<String>,
    pub order_index: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub class_id: Option<i32>,
    pub is_free: bool,
    pub price: i32,
    pub duration: Option<String>,
    pub lessons_count: i32,
    pub instructor_name: Option<String>,
    pub order_index: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct CoursePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub class_id: Option<i32>,
    pub is_free: Option<bool>,
    pub price: Option<i32>,
    pub duration: Option<String>,
    pub lessons_count: Option<i32>,
    pub instructor_name: Option<String>,
    pub order_index: Option<i32>,
    pub is_active: Option<bool>,
}
