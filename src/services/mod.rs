pub mod attempt_service;
pub mod catalog_service;
pub mod course_service;
pub mod question_service;
pub mod scoring;
pub mod test_service;
