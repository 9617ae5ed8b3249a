pub mod attempts;
pub mod catalog;
pub mod courses;
pub mod health;
pub mod tests;
