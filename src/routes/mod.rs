use axum::{
    routing::{get, post},
    Router,
};
use tera::Context;

use crate::{
    services::user_history::{list_favorites, list_recent},
    types::{app_state::AppState, user_session::UserSession},
};

mod get_arrivals;
mod get_index;
mod get_station_info;
pub mod not_found;
mod post_add_favorite;
mod post_clear_history;
mod post_find_station;
mod post_remove_favorite;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route("/", get(get_index::get_index))
        .route("/find_station", post(post_find_station::post_find_station))
        .route("/add_favorite", post(post_add_favorite::post_add_favorite))
        .route(
            "/remove_favorite",
            post(post_remove_favorite::post_remove_favorite),
        )
        .route("/clear_history", post(post_clear_history::post_clear_history))
        .route(
            "/api/station_info/:station_name",
            get(get_station_info::get_station_info),
        )
        .route("/api/arrivals/:station_id", get(get_arrivals::get_arrivals))
}

/// Context shared by every page that shows the session's history sidebar.
fn session_context(session: &UserSession) -> Context {
    let mut context = Context::new();
    context.insert("recent", list_recent(session));
    context.insert("favorites", list_favorites(session));
    context.insert("error_message", &None::<String>);
    context
}
