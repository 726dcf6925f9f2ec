use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(test)]
use axum_macros::debug_handler;
use axum_extra::extract::cookie::SignedCookieJar;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    services::user_history::remove_favorite,
    types::app_state::AppState,
    utils::{app_error::AppError, validated_json::ValidatedJson, validators::non_blank},
};

#[derive(Validate, Serialize, Deserialize)]
pub struct RemoveFavoritePayload {
    #[validate(custom(function = "non_blank"))]
    pub address: String,
}

#[derive(Serialize, Deserialize)]
pub struct RemoveFavoriteResponse {
    pub status: String,
}

#[cfg_attr(test, debug_handler)]
pub async fn post_remove_favorite(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    ValidatedJson(payload): ValidatedJson<RemoveFavoritePayload>,
) -> Result<Response, AppError> {
    let mut session = state.sessions.load(&jar).await;

    if !remove_favorite(&mut session, &payload.address) {
        return Ok(Json(RemoveFavoriteResponse {
            status: "error".to_string(),
        })
        .into_response());
    }

    Ok((
        state.sessions.save(jar, session).await,
        Json(RemoveFavoriteResponse {
            status: "success".to_string(),
        }),
    )
        .into_response())
}
