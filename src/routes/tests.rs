use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use validator::Validate;

use crate::dto::test_dto::{
    AdminTestDetailResponse, CreateQuestionPayload, CreateTestPayload, LearnerQuestion,
    LearnerTestDetailResponse, TestListQuery, TestReadQuery, UpdateQuestionPayload,
    UpdateTestPayload,
};
use crate::error::Result;
use crate::AppState;

#[axum::debug_handler]
pub async fn list_tests(
    State(state): State<AppState>,
    Query(query): Query<TestListQuery>,
) -> Result<impl IntoResponse> {
    let tests = state.test_service.list(query.test_series_id).await?;
    Ok(Json(tests))
}

#[axum::debug_handler]
pub async fn list_tests_by_series(
    State(state): State<AppState>,
    Path(series_id): Path<i32>,
) -> Result<impl IntoResponse> {
    let tests = state.test_service.list(Some(series_id)).await?;
    Ok(Json(tests))
}

/// Test read, differentiated by caller role: `?admin=true` returns the
/// full bank with answer keys, the default learner mode returns a random
/// sample with keys stripped.
#[axum::debug_handler]
pub async fn get_test(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<TestReadQuery>,
) -> Result<Response> {
    let assembled = state.test_service.read_detail(id, query.admin).await?;
    if query.admin {
        let response = AdminTestDetailResponse {
            test: assembled.test,
            questions: assembled.questions,
            total_questions_in_bank: assembled.total_in_bank,
        };
        Ok(Json(response).into_response())
    } else {
        let response = LearnerTestDetailResponse {
            test: assembled.test,
            questions: assembled
                .questions
                .into_iter()
                .map(LearnerQuestion::from)
                .collect(),
            total_questions_in_bank: assembled.total_in_bank,
        };
        Ok(Json(response).into_response())
    }
}

#[utoipa::path(
    post,
    path = "/api/tests",
    request_body = CreateTestPayload,
    responses(
        (status = 201, description = "Test created successfully"),
        (status = 400, description = "Invalid payload or unknown series")
    )
)]
#[axum::debug_handler]
pub async fn create_test(
    State(state): State<AppState>,
    Json(payload): Json<CreateTestPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let test = state.test_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(test)))
}

#[utoipa::path(
    put,
    path = "/api/tests/{id}",
    params(
        ("id" = i32, Path, description = "Test ID")
    ),
    request_body = UpdateTestPayload,
    responses(
        (status = 200, description = "Test updated successfully"),
        (status = 404, description = "Test not found")
    )
)]
#[axum::debug_handler]
pub async fn update_test(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTestPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let test = state.test_service.update(id, payload).await?;
    Ok(Json(test))
}

#[axum::debug_handler]
pub async fn delete_test(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    state.test_service.delete(id).await?;
    Ok(Json(json!({ "message": "Test deleted" })))
}

#[axum::debug_handler]
pub async fn list_questions(
    State(state): State<AppState>,
    Path(test_id): Path<i32>,
) -> Result<impl IntoResponse> {
    let questions = state.question_service.list_for_test(test_id).await?;
    Ok(Json(questions))
}

#[utoipa::path(
    post,
    path = "/api/questions",
    request_body = CreateQuestionPayload,
    responses(
        (status = 201, description = "Question created; parent aggregates updated"),
        (status = 400, description = "Invalid payload or unknown test")
    )
)]
#[axum::debug_handler]
pub async fn create_question(
    State(state): State<AppState>,
    Json(payload): Json<CreateQuestionPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let question = state.question_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(question)))
}

#[utoipa::path(
    put,
    path = "/api/questions/{id}",
    params(
        ("id" = i32, Path, description = "Question ID")
    ),
    request_body = UpdateQuestionPayload,
    responses(
        (status = 200, description = "Question updated; parent aggregates updated"),
        (status = 404, description = "Question not found")
    )
)]
#[axum::debug_handler]
pub async fn update_question(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateQuestionPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let question = state.question_service.update(id, payload).await?;
    Ok(Json(question))
}

#[axum::debug_handler]
pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    state.question_service.delete(id).await?;
    Ok(Json(json!({ "message": "Question deleted" })))
}
