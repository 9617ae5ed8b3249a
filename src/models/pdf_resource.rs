use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PdfResource {
    pub id: i32,
    pub test_series_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub file_url: String,
    pub file_size: Option<String>,
    pub download_count: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPdfResource {
    pub test_series_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub file_url: String,
    pub file_size: Option<String>,
    pub is_active: bool,
}
