use crate::dto::course_dto::{CreateCoursePayload, UpdateCoursePayload};
use crate::error::{Error, Result};
use crate::models::course::Course;
use crate::store::EntityStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct CourseService {
    store: Arc<dyn EntityStore>,
}

impl CourseService {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, payload: CreateCoursePayload) -> Result<Course> {
        self.store.insert_course(payload.into_new()).await
    }

    /// `course_type` is the raw `?type=` query value: "free" or "paid"
    /// filter, anything else lists everything.
    pub async fn list(&self, course_type: Option<&str>) -> Result<Vec<Course>> {
        let is_free = match course_type {
            Some("free") => Some(true),
            Some("paid") => Some(false),
            _ => None,
        };
        self.store.list_courses(is_free).await
    }

    pub async fn get(&self, id: i32) -> Result<Course> {
        self.store
            .get_course(id)
            .await?
            .ok_or_else(|| Error::NotFound("Course not found".to_string()))
    }

    pub async fn update(&self, id: i32, payload: UpdateCoursePayload) -> Result<Course> {
        self.store
            .update_course(id, payload.into_patch())
            .await?
            .ok_or_else(|| Error::NotFound("Course not found".to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        if self.store.delete_course(id).await? {
            Ok(())
        } else {
            Err(Error::NotFound("Course not found".to_string()))
        }
    }
}
