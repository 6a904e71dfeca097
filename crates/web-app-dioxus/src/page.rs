pub mod exercise_request;
pub mod log;
pub mod not_found;
