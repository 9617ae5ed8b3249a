use crate::models::course::{CoursePatch, NewCourse};
use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCoursePayload {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    pub class_id: Option<i32>,
    #[serde(default = "default_true")]
    pub is_free: bool,
    #[serde(default)]
    pub price: i32,
    pub duration: Option<String>,
    #[serde(default)]
    pub lessons_count: i32,
    pub instructor_name: Option<String>,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl CreateCoursePayload {
    pub fn into_new(self) -> NewCourse {
        NewCourse {
            title: self.title,
            description: self.description,
            class_id: self.class_id,
            is_free: self.is_free,
            price: self.price,
            duration: self.duration,
            lessons_count: self.lessons_count,
            instructor_name: self.instructor_name,
            order_index: self.order_index,
            is_active: self.is_active,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateCoursePayload {
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

impl UpdateCoursePayload {
    pub fn into_patch(self) -> CoursePatch {
        CoursePatch {
            title: self.title,
            description: self.description,
            class_id: self.class_id,
            is_free: self.is_free,
            price: self.price,
            duration: self.duration,
            lessons_count: self.lessons_count,
            instructor_name: self.instructor_name,
            order_index: self.order_index,
            is_active: self.is_active,
        }
    }
}

/// `?type=free|paid` filter on the course listing.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseListQuery {
    #[serde(rename = "type")]
    pub course_type: Option<String>,
}
