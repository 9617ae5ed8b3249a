use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Subject {
    pub id: i32,
    pub class_id: i32,
    pub name: String,
    pub icon: Option<String>,
    pub color: String,
    pub order_index: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct NewSubject {
    pub class_id: i32,
    pub name: String,
    pub icon: Option<String>,
    pub color: String,
    pub order_index: i32,
    pub is_active: bool,
}
