use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::SignedCookieJar;
use tracing::debug;

use crate::{services::user_history::clear_history, types::app_state::AppState};

pub async fn post_clear_history(State(state): State<AppState>, jar: SignedCookieJar) -> Response {
    let mut session = state.sessions.load(&jar).await;
    debug!("Clearing {} recent searches", session.recent.len());
    clear_history(&mut session);

    (state.sessions.save(jar, session).await, Redirect::to("/")).into_response()
}
