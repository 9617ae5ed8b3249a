pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

use crate::services::{
    attempt_service::AttemptService, catalog_service::CatalogService,
    course_service::CourseService, question_service::QuestionService, test_service::TestService,
};
use crate::store::EntityStore;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EntityStore>,
    pub catalog_service: CatalogService,
    pub test_service: TestService,
    pub question_service: QuestionService,
    pub attempt_service: AttemptService,
    pub course_service: CourseService,
}

impl AppState {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        let catalog_service = CatalogService::new(store.clone());
        let test_service = TestService::new(store.clone());
        let question_service = QuestionService::new(store.clone());
        let attempt_service = AttemptService::new(store.clone());
        let course_service = CourseService::new(store.clone());

        Self {
            store,
            catalog_service,
            test_service,
            question_service,
            attempt_service,
            course_service,
        }
    }
}

/// Full API surface; shared between `main` and the integration tests.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health))
        .route(
            "/api/classes",
            get(routes::catalog::list_classes).post(routes::catalog::create_class),
        )
        .route("/api/classes/:id", get(routes::catalog::get_class))
        .route(
            "/api/classes/:id/subjects",
            get(routes::catalog::list_subjects_by_class),
        )
        .route(
            "/api/subjects",
            get(routes::catalog::list_subjects).post(routes::catalog::create_subject),
        )
        .route("/api/subjects/:id", get(routes::catalog::get_subject))
        .route(
            "/api/subjects/:id/test-series",
            get(routes::catalog::list_series_by_subject),
        )
        .route(
            "/api/test-series",
            get(routes::catalog::list_series).post(routes::catalog::create_series),
        )
        .route(
            "/api/test-series/:id",
            get(routes::catalog::get_series).delete(routes::catalog::delete_series),
        )
        .route(
            "/api/test-series/:id/pdfs",
            get(routes::catalog::list_pdfs_by_series),
        )
        .route(
            "/api/test-series/:id/tests",
            get(routes::tests::list_tests_by_series),
        )
        .route(
            "/api/pdfs",
            get(routes::catalog::list_pdfs).post(routes::catalog::create_pdf),
        )
        .route(
            "/api/pdfs/:id",
            axum::routing::delete(routes::catalog::delete_pdf),
        )
        .route(
            "/api/tests",
            get(routes::tests::list_tests).post(routes::tests::create_test),
        )
        .route(
            "/api/tests/:id",
            get(routes::tests::get_test)
                .put(routes::tests::update_test)
                .delete(routes::tests::delete_test),
        )
        .route(
            "/api/tests/:id/questions",
            get(routes::tests::list_questions),
        )
        .route("/api/tests/:id/submit", post(routes::attempts::submit_test))
        .route("/api/questions", post(routes::tests::create_question))
        .route(
            "/api/questions/:id",
            axum::routing::put(routes::tests::update_question)
                .delete(routes::tests::delete_question),
        )
        .route(
            "/api/test-attempts",
            get(routes::attempts::list_attempts),
        )
        .route(
            "/api/courses",
            get(routes::courses::list_courses).post(routes::courses::create_course),
        )
        .route(
            "/api/courses/:id",
            get(routes::courses::get_course)
                .put(routes::courses::update_course)
                .delete(routes::courses::delete_course),
        )
        .with_state(state)
}
