use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;
use validator::Validate;

use crate::dto::catalog_dto::{
    CreateClassPayload, CreatePdfPayload, CreateSeriesPayload, CreateSubjectPayload, PdfListQuery,
    SeriesListQuery, SubjectListQuery,
};
use crate::error::Result;
use crate::AppState;

#[axum::debug_handler]
pub async fn list_classes(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let classes = state.catalog_service.list_classes().await?;
    Ok(Json(classes))
}

#[axum::debug_handler]
pub async fn get_class(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let class = state.catalog_service.get_class(id).await?;
    Ok(Json(class))
}

#[axum::debug_handler]
pub async fn create_class(
    State(state): State<AppState>,
    Json(payload): Json<CreateClassPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let class = state.catalog_service.create_class(payload).await?;
    Ok((StatusCode::CREATED, Json(class)))
}

#[axum::debug_handler]
pub async fn list_subjects_by_class(
    State(state): State<AppState>,
    Path(class_id): Path<i32>,
) -> Result<impl IntoResponse> {
    let subjects = state.catalog_service.list_subjects(Some(class_id)).await?;
    Ok(Json(subjects))
}

#[axum::debug_handler]
pub async fn list_subjects(
    State(state): State<AppState>,
    Query(query): Query<SubjectListQuery>,
) -> Result<impl IntoResponse> {
    let subjects = state.catalog_service.list_subjects(query.class_id).await?;
    Ok(Json(subjects))
}

#[axum::debug_handler]
pub async fn get_subject(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let subject = state.catalog_service.get_subject(id).await?;
    Ok(Json(subject))
}

#[axum::debug_handler]
pub async fn create_subject(
    State(state): State<AppState>,
    Json(payload): Json<CreateSubjectPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let subject = state.catalog_service.create_subject(payload).await?;
    Ok((StatusCode::CREATED, Json(subject)))
}

#[axum::debug_handler]
pub async fn list_series_by_subject(
    State(state): State<AppState>,
    Path(subject_id): Path<i32>,
) -> Result<impl IntoResponse> {
    let series = state.catalog_service.list_series(Some(subject_id)).await?;
    Ok(Json(series))
}

#[axum::debug_handler]
pub async fn list_series(
    State(state): State<AppState>,
    Query(query): Query<SeriesListQuery>,
) -> Result<impl IntoResponse> {
    let series = state.catalog_service.list_series(query.subject_id).await?;
    Ok(Json(series))
}

#[axum::debug_handler]
pub async fn get_series(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let series = state.catalog_service.get_series(id).await?;
    Ok(Json(series))
}

#[axum::debug_handler]
pub async fn create_series(
    State(state): State<AppState>,
    Json(payload): Json<CreateSeriesPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let series = state.catalog_service.create_series(payload).await?;
    Ok((StatusCode::CREATED, Json(series)))
}

#[axum::debug_handler]
pub async fn delete_series(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    state.catalog_service.delete_series(id).await?;
    Ok(Json(json!({ "message": "Test series deleted" })))
}

#[axum::debug_handler]
pub async fn list_pdfs_by_series(
    State(state): State<AppState>,
    Path(series_id): Path<i32>,
) -> Result<impl IntoResponse> {
    let pdfs = state.catalog_service.list_pdfs(Some(series_id)).await?;
    Ok(Json(pdfs))
}

#[axum::debug_handler]
pub async fn list_pdfs(
    State(state): State<AppState>,
    Query(query): Query<PdfListQuery>,
) -> Result<impl IntoResponse> {
    let pdfs = state.catalog_service.list_pdfs(query.test_series_id).await?;
    Ok(Json(pdfs))
}

#[axum::debug_handler]
pub async fn create_pdf(
    State(state): State<AppState>,
    Json(payload): Json<CreatePdfPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let pdf = state.catalog_service.create_pdf(payload).await?;
    Ok((StatusCode::CREATED, Json(pdf)))
}

#[axum::debug_handler]
pub async fn delete_pdf(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    state.catalog_service.delete_pdf(id).await?;
    Ok(Json(json!({ "message": "PDF deleted" })))
}
