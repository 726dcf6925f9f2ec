pub mod app_state;
pub mod coordinate;
pub mod lookup_result;
pub mod transit;
pub mod user_session;
