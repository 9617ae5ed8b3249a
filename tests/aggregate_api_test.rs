mod common;

use axum::http::StatusCode;
use common::{get_test_json, seed_question, seed_series, seed_test, send};
use serde_json::json;

#[tokio::test]
async fn aggregates_follow_question_mutations() {
    let app = common::test_app();
    let series_id = seed_series(&app).await;
    let test_id = seed_test(&app, series_id, 10).await;

    let body = get_test_json(&app, test_id, true).await;
    assert_eq!(body["total_questions"], 0);
    assert_eq!(body["total_marks"], 0);

    let q1 = seed_question(&app, test_id, "a", 4, 1).await;
    let q2 = seed_question(&app, test_id, "b", 4, 2).await;

    let body = get_test_json(&app, test_id, true).await;
    assert_eq!(body["total_questions"], 2);
    assert_eq!(body["total_marks"], 8);

    // Marks-only update moves total_marks, not the count.
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/questions/{}", q1),
        Some(json!({ "marks": 6 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let body = get_test_json(&app, test_id, true).await;
    assert_eq!(body["total_questions"], 2);
    assert_eq!(body["total_marks"], 10);

    let (status, _) = send(&app, "DELETE", &format!("/api/questions/{}", q2), None).await;
    assert_eq!(status, StatusCode::OK);

    let body = get_test_json(&app, test_id, true).await;
    assert_eq!(body["total_questions"], 1);
    assert_eq!(body["total_marks"], 6);
}

#[tokio::test]
async fn aggregates_survive_a_batch_of_mutations() {
    let app = common::test_app();
    let series_id = seed_series(&app).await;
    let test_id = seed_test(&app, series_id, 10).await;

    let mut ids = Vec::new();
    for i in 0..12 {
        ids.push(seed_question(&app, test_id, "c", (i % 3) + 1, i).await);
    }
    for id in ids.iter().take(5) {
        let (status, _) = send(&app, "DELETE", &format!("/api/questions/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
    }

    let body = get_test_json(&app, test_id, true).await;
    let questions = body["questions"].as_array().unwrap();
    let expected_marks: i64 = questions
        .iter()
        .map(|q| q["marks"].as_i64().unwrap())
        .sum();
    assert_eq!(body["total_questions"].as_i64().unwrap(), questions.len() as i64);
    assert_eq!(body["total_marks"].as_i64().unwrap(), expected_marks);
}

#[tokio::test]
async fn deleting_a_test_removes_its_question_bank() {
    let app = common::test_app();
    let series_id = seed_series(&app).await;
    let test_id = seed_test(&app, series_id, 10).await;
    let question_id = seed_question(&app, test_id, "a", 1, 1).await;

    let (status, _) = send(&app, "DELETE", &format!("/api/tests/{}", test_id), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "GET", &format!("/api/tests/{}", test_id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Updating the orphan-candidate question must fail: it went with the test.
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/questions/{}", question_id),
        Some(json!({ "marks": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn question_create_rejects_unknown_test() {
    let app = common::test_app();
    let (status, _) = send(
        &app,
        "POST",
        "/api/questions",
        Some(json!({
            "test_id": 999,
            "question_text": "Orphan?",
            "option_a": "1",
            "option_b": "2",
            "option_c": "3",
            "option_d": "4",
            "correct_option": "a"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn question_create_rejects_invalid_option_letter() {
    let app = common::test_app();
    let series_id = seed_series(&app).await;
    let test_id = seed_test(&app, series_id, 10).await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/questions",
        Some(json!({
            "test_id": test_id,
            "question_text": "Bad key",
            "option_a": "1",
            "option_b": "2",
            "option_c": "3",
            "option_d": "4",
            "correct_option": "e"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
