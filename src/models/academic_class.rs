use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A grade/board combination, e.g. "Class 11th Science".
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AcademicClass {
    pub id: i32,
    pub name: String,
    pub display_name: String,
    pub board: Option<String>,
    pub order_index: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct NewAcademicClass {
    pub name: String,
    pub display_name: String,
    pub board: Option<String>,
    pub order_index: i32,
    pub is_active: bool,
}
