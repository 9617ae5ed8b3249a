use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;
use validator::Validate;

use crate::dto::course_dto::{CourseListQuery, CreateCoursePayload, UpdateCoursePayload};
use crate::error::Result;
use crate::AppState;

#[axum::debug_handler]
pub async fn list_courses(
    State(state): State<AppState>,
    Query(query): Query<CourseListQuery>,
) -> Result<impl IntoResponse> {
    let courses = state
        .course_service
        .list(query.course_type.as_deref())
        .await?;
    Ok(Json(courses))
}

#[axum::debug_handler]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let course = state.course_service.get(id).await?;
    Ok(Json(course))
}

#[axum::debug_handler]
pub async fn create_course(
    State(state): State<AppState>,
    Json(payload): Json<CreateCoursePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let course = state.course_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

#[axum::debug_handler]
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCoursePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let course = state.course_service.update(id, payload).await?;
    Ok(Json(course))
}

#[axum::debug_handler]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    state.course_service.delete(id).await?;
    Ok(Json(json!({ "message": "Course deleted" })))
}
