use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::dto::attempt_dto::{
    AttemptListQuery, AttemptResultResponse, SubmitAttemptRequest, SubmitQuery,
};
use crate::error::Result;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/tests/{id}/submit",
    params(
        ("id" = i32, Path, description = "Test ID"),
        ("time_taken" = Option<i32>, Query, description = "Elapsed time in seconds")
    ),
    request_body = SubmitAttemptRequest,
    responses(
        (status = 201, description = "Submission graded", body = AttemptResultResponse),
        (status = 400, description = "Malformed answers payload"),
        (status = 404, description = "Test not found")
    )
)]
#[axum::debug_handler]
pub async fn submit_test(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<SubmitQuery>,
    Json(req): Json<SubmitAttemptRequest>,
) -> Result<impl IntoResponse> {
    req.validate()?;
    let result = state
        .attempt_service
        .submit(id, req, query.time_taken)
        .await?;
    Ok((StatusCode::CREATED, Json(result)))
}

#[axum::debug_handler]
pub async fn list_attempts(
    State(state): State<AppState>,
    Query(query): Query<AttemptListQuery>,
) -> Result<impl IntoResponse> {
    let attempts = state.attempt_service.list(query.test_id).await?;
    Ok(Json(attempts))
}
