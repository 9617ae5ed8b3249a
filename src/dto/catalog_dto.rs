use crate::models::academic_class::NewAcademicClass;
use crate::models::pdf_resource::NewPdfResource;
use crate::models::subject::NewSubject;
use crate::models::test_series::NewTestSeries;
use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_true() -> bool {
    true
}

fn default_color() -> String {
    "#D4AF37".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateClassPayload {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub display_name: String,
    pub board: Option<String>,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl CreateClassPayload {
    pub fn into_new(self) -> NewAcademicClass {
        NewAcademicClass {
            name: self.name,
            display_name: self.display_name,
            board: self.board,
            order_index: self.order_index,
            is_active: self.is_active,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSubjectPayload {
    pub class_id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    pub icon: Option<String>,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl CreateSubjectPayload {
    pub fn into_new(self) -> NewSubject {
        NewSubject {
            class_id: self.class_id,
            name: self.name,
            icon: self.icon,
            color: self.color,
            order_index: self.order_index,
            is_active: self.is_active,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSeriesPayload {
    pub subject_id: i32,
    #[validate(length(min = 1))]
    pub title: String,
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_free: bool,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub price: i32,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl CreateSeriesPayload {
    pub fn into_new(self) -> NewTestSeries {
        NewTestSeries {
            subject_id: self.subject_id,
            title: self.title,
            description: self.description,
            is_free: self.is_free,
            price: self.price,
            order_index: self.order_index,
            is_active: self.is_active,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePdfPayload {
    pub test_series_id: i32,
    #[validate(length(min = 1))]
    pub title: String,
    pub description: Option<String>,
    #[validate(length(min = 1))]
    pub file_url: String,
    pub file_size: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl CreatePdfPayload {
    pub fn into_new(self) -> NewPdfResource {
        NewPdfResource {
            test_series_id: self.test_series_id,
            title: self.title,
            description: self.description,
            file_url: self.file_url,
            file_size: self.file_size,
            is_active: self.is_active,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubjectListQuery {
    pub class_id: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeriesListQuery {
    pub subject_id: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PdfListQuery {
    pub test_series_id: Option<i32>,
}
