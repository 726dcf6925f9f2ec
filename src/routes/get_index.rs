use axum::{extract::State, response::Response};
use axum_extra::extract::cookie::SignedCookieJar;

use super::session_context;
use crate::types::app_state::AppState;

pub async fn get_index(State(state): State<AppState>, jar: SignedCookieJar) -> Response {
    let session = state.sessions.load(&jar).await;

    state
        .templates
        .page("index.html", &session_context(&session))
}
