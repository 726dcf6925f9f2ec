pub mod app_error;
pub mod distance;
pub mod session_store;
pub mod templates;
pub mod validated_json;
pub mod validators;
