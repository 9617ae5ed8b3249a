pub mod academic_class;
pub mod course;
pub mod mcq_question;
pub mod pdf_resource;
pub mod subject;
pub mod test_attempt;
pub mod test_series;
