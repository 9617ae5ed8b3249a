mod common;

use std::collections::HashSet;

use common::{get_test_json, seed_question, seed_series, seed_test};

async fn seed_bank(app: &axum::Router, test_id: i64, count: i64) {
    for i in 0..count {
        seed_question(app, test_id, "a", 2, i + 1).await;
    }
}

#[tokio::test]
async fn admin_read_returns_the_full_bank_with_answer_keys() {
    let app = common::test_app();
    let series_id = seed_series(&app).await;
    let test_id = seed_test(&app, series_id, 3).await;
    seed_bank(&app, test_id, 7).await;

    let body = get_test_json(&app, test_id, true).await;
    let questions = body["questions"].as_array().unwrap();

    assert_eq!(questions.len(), 7);
    assert_eq!(body["total_questions_in_bank"], 7);
    for q in questions {
        assert_eq!(q["correct_option"], "a");
    }
}

#[tokio::test]
async fn learner_read_samples_without_duplicates_and_strips_keys() {
    let app = common::test_app();
    let series_id = seed_series(&app).await;
    let test_id = seed_test(&app, series_id, 3).await;
    seed_bank(&app, test_id, 7).await;

    let body = get_test_json(&app, test_id, false).await;
    let questions = body["questions"].as_array().unwrap();

    assert_eq!(questions.len(), 3);
    assert_eq!(body["total_questions_in_bank"], 7);

    let mut seen = HashSet::new();
    for q in questions {
        assert!(seen.insert(q["id"].as_i64().unwrap()));
        assert!(q.get("correct_option").is_none());
        assert!(q.get("explanation").is_none());
    }
}

#[tokio::test]
async fn learner_gets_whole_bank_when_it_is_smaller_than_the_sample() {
    let app = common::test_app();
    let series_id = seed_series(&app).await;
    let test_id = seed_test(&app, series_id, 10).await;
    seed_bank(&app, test_id, 4).await;

    let body = get_test_json(&app, test_id, false).await;
    assert_eq!(body["questions"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn zero_questions_to_show_falls_back_to_ten() {
    let app = common::test_app();
    let series_id = seed_series(&app).await;
    let test_id = seed_test(&app, series_id, 0).await;
    seed_bank(&app, test_id, 15).await;

    let body = get_test_json(&app, test_id, false).await;
    assert_eq!(body["questions"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn empty_bank_reads_as_an_empty_test() {
    let app = common::test_app();
    let series_id = seed_series(&app).await;
    let test_id = seed_test(&app, series_id, 5).await;

    let body = get_test_json(&app, test_id, false).await;
    assert!(body["questions"].as_array().unwrap().is_empty());
    assert_eq!(body["total_questions_in_bank"], 0);
}
