use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tower::ServiceExt;
use tutorhub_backend::{app_router, store::memory::MemoryStore, AppState};

pub fn test_app() -> Router {
    let state = AppState::new(Arc::new(MemoryStore::new()));
    app_router(state)
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<JsonValue>,
) -> (StatusCode, JsonValue) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Seeds class -> subject -> series and returns the series id.
pub async fn seed_series(app: &Router) -> i64 {
    let (status, class) = send(
        app,
        "POST",
        "/api/classes",
        Some(serde_json::json!({
            "name": "Class 10th",
            "display_name": "10th Standard",
            "board": "State Board"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, subject) = send(
        app,
        "POST",
        "/api/subjects",
        Some(serde_json::json!({
            "class_id": class["id"],
            "name": "Science"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, series) = send(
        app,
        "POST",
        "/api/test-series",
        Some(serde_json::json!({
            "subject_id": subject["id"],
            "title": "Science Test Series"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    series["id"].as_i64().unwrap()
}

/// Creates a test under the series and returns its id.
pub async fn seed_test(app: &Router, series_id: i64, questions_to_show: i64) -> i64 {
    let (status, test) = send(
        app,
        "POST",
        "/api/tests",
        Some(serde_json::json!({
            "test_series_id": series_id,
            "title": "Chapter 1 Test",
            "questions_to_show": questions_to_show,
            "passing_marks": 5,
            "duration_minutes": 30
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    test["id"].as_i64().unwrap()
}

pub async fn seed_question(
    app: &Router,
    test_id: i64,
    correct_option: &str,
    marks: i64,
    order_index: i64,
) -> i64 {
    let (status, question) = send(
        app,
        "POST",
        "/api/questions",
        Some(serde_json::json!({
            "test_id": test_id,
            "question_text": format!("Question {}", order_index),
            "option_a": "Option A",
            "option_b": "Option B",
            "option_c": "Option C",
            "option_d": "Option D",
            "correct_option": correct_option,
            "marks": marks,
            "order_index": order_index
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    question["id"].as_i64().unwrap()
}

pub async fn get_test_json(app: &Router, test_id: i64, admin: bool) -> JsonValue {
    let uri = if admin {
        format!("/api/tests/{}?admin=true", test_id)
    } else {
        format!("/api/tests/{}", test_id)
    };
    let (status, body) = send(app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    body
}
