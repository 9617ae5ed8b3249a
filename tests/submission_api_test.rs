mod common;

use axum::http::StatusCode;
use common::{seed_question, seed_series, seed_test, send};
use serde_json::json;

async fn two_question_test(app: &axum::Router) -> (i64, i64, i64) {
    let series_id = seed_series(app).await;
    let test_id = seed_test(app, series_id, 10).await;
    let q1 = seed_question(app, test_id, "a", 4, 1).await;
    let q2 = seed_question(app, test_id, "b", 4, 2).await;
    (test_id, q1, q2)
}

fn submission(answers: &serde_json::Value) -> serde_json::Value {
    json!({
        "student_name": "Asha",
        "student_email": "asha@example.com",
        "answers_json": answers.to_string()
    })
}

#[tokio::test]
async fn grades_one_right_one_wrong() {
    let app = common::test_app();
    let (test_id, q1, q2) = two_question_test(&app).await;

    let answers = json!({ q1.to_string(): "a", q2.to_string(): "c" });
    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/tests/{}/submit?time_taken=120", test_id),
        Some(submission(&answers)),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["score"], 4);
    assert_eq!(body["total_marks"], 8);
    assert_eq!(body["correct_answers"], 1);
    assert_eq!(body["wrong_answers"], 1);
    assert_eq!(body["unanswered"], 0);
    assert_eq!(body["percentage"], 50.0);
    // passing_marks is 5; a score of 4 fails.
    assert_eq!(body["passed"], false);
}

#[tokio::test]
async fn empty_answer_map_counts_everything_unanswered() {
    let app = common::test_app();
    let (test_id, _, _) = two_question_test(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/tests/{}/submit", test_id),
        Some(submission(&json!({}))),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["score"], 0);
    assert_eq!(body["correct_answers"], 0);
    assert_eq!(body["wrong_answers"], 0);
    assert_eq!(body["unanswered"], 2);
}

#[tokio::test]
async fn uppercase_answer_letters_match() {
    let app = common::test_app();
    let (test_id, q1, _) = two_question_test(&app).await;

    let answers = json!({ q1.to_string(): "A" });
    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/tests/{}/submit", test_id),
        Some(submission(&answers)),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["correct_answers"], 1);
    assert_eq!(body["score"], 4);
    assert_eq!(body["unanswered"], 1);
}

#[tokio::test]
async fn zero_question_test_scores_without_division_error() {
    let app = common::test_app();
    let series_id = seed_series(&app).await;
    let test_id = seed_test(&app, series_id, 10).await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/tests/{}/submit", test_id),
        Some(submission(&json!({}))),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["total_marks"], 0);
    assert_eq!(body["percentage"], 0.0);
}

#[tokio::test]
async fn duplicate_submissions_create_independent_attempts() {
    let app = common::test_app();
    let (test_id, q1, q2) = two_question_test(&app).await;
    let answers = json!({ q1.to_string(): "a", q2.to_string(): "b" });

    let (_, first) = send(
        &app,
        "POST",
        &format!("/api/tests/{}/submit", test_id),
        Some(submission(&answers)),
    )
    .await;
    let (_, second) = send(
        &app,
        "POST",
        &format!("/api/tests/{}/submit", test_id),
        Some(submission(&answers)),
    )
    .await;

    assert_ne!(first["id"], second["id"]);
    assert_eq!(first["score"], second["score"]);
    assert_eq!(first["correct_answers"], second["correct_answers"]);

    let (status, attempts) = send(
        &app,
        "GET",
        &format!("/api/test-attempts?test_id={}", test_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(attempts.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn malformed_answers_payload_is_rejected_before_persistence() {
    let app = common::test_app();
    let (test_id, _, _) = two_question_test(&app).await;

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/tests/{}/submit", test_id),
        Some(json!({
            "student_name": "Asha",
            "answers_json": "not a json object"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, attempts) = send(
        &app,
        "GET",
        &format!("/api/test-attempts?test_id={}", test_id),
        None,
    )
    .await;
    assert!(attempts.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn submitting_to_unknown_test_is_not_found() {
    let app = common::test_app();
    let (status, _) = send(
        &app,
        "POST",
        "/api/tests/424242/submit",
        Some(submission(&json!({}))),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn passing_flag_respects_passing_marks() {
    let app = common::test_app();
    let (test_id, q1, q2) = two_question_test(&app).await;

    // Both right: 8 >= passing_marks 5.
    let answers = json!({ q1.to_string(): "a", q2.to_string(): "b" });
    let (_, body) = send(
        &app,
        "POST",
        &format!("/api/tests/{}/submit", test_id),
        Some(submission(&answers)),
    )
    .await;
    assert_eq!(body["passed"], true);
    assert_eq!(body["percentage"], 100.0);
}
