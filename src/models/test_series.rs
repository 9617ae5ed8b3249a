use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Grouping container for tests and PDFs under one subject.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TestSeries {
    pub id: i32,
    pub subject_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub is_free: bool,
    pub price: i32,
    pub order_index: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTestSeries {
    pub subject_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub is_free: bool,
    pub price: i32,
    pub order_index: i32,
    pub is_active: bool,
}
