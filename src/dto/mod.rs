pub mod attempt_dto;
pub mod catalog_dto;
pub mod course_dto;
pub mod test_dto;
