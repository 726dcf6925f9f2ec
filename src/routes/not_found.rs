use axum::{extract::State, http::StatusCode, response::Response};

use crate::types::app_state::AppState;

pub async fn not_found(State(state): State<AppState>) -> Response {
    state
        .templates
        .error_page(StatusCode::NOT_FOUND, "Page not found")
}
