use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(test)]
use axum_macros::debug_handler;
use axum_extra::extract::cookie::SignedCookieJar;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    services::user_history::add_favorite,
    types::{app_state::AppState, coordinate::Coordinate, user_session::FavoriteEntry},
    utils::{app_error::AppError, validated_json::ValidatedJson, validators::non_blank},
};

#[derive(Validate, Serialize, Deserialize)]
pub struct AddFavoriteStation {
    #[validate(custom(function = "non_blank"))]
    pub name: String,
}

#[derive(Validate, Serialize, Deserialize)]
pub struct AddFavoritePayload {
    #[validate(custom(function = "non_blank"))]
    pub address: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    #[validate(nested)]
    pub station: AddFavoriteStation,
}

#[derive(Serialize, Deserialize)]
pub struct AddFavoriteResponse {
    pub status: String,
}

#[cfg_attr(test, debug_handler)]
pub async fn post_add_favorite(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    ValidatedJson(payload): ValidatedJson<AddFavoritePayload>,
) -> Result<Response, AppError> {
    let mut session = state.sessions.load(&jar).await;

    let added = add_favorite(
        &mut session,
        FavoriteEntry {
            resolved_address: payload.address,
            user_coordinate: Coordinate::new(payload.latitude, payload.longitude),
            station_name: payload.station.name,
            added_on: Utc::now()
                .with_timezone(&state.display_timezone)
                .format("%Y-%m-%d")
                .to_string(),
        },
    );

    if !added {
        return Ok(Json(AddFavoriteResponse {
            status: "already_exists".to_string(),
        })
        .into_response());
    }

    Ok((
        state.sessions.save(jar, session).await,
        Json(AddFavoriteResponse {
            status: "success".to_string(),
        }),
    )
        .into_response())
}

#[cfg(test)]
pub(crate) mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use tower::ServiceExt;

    use super::*;
    use crate::app::{gen_mock_app, jar_from, session_cookie_from};

    pub(crate) fn json_request(
        uri: &str,
        body: serde_json::Value,
        cookie: Option<&str>,
    ) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    pub(crate) fn favorite_body(address: &str) -> serde_json::Value {
        serde_json::json!({
            "address": address,
            "latitude": 42.3601,
            "longitude": -71.0589,
            "station": {"name": "Government Center"}
        })
    }

    async fn post(
        app: &Router,
        body: serde_json::Value,
        cookie: Option<&str>,
    ) -> (String, Option<String>) {
        let response = app
            .clone()
            .oneshot(json_request("/add_favorite", body, cookie))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let cookie = session_cookie_from(&response);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: AddFavoriteResponse = serde_json::from_slice(&body).unwrap();
        (body.status, cookie)
    }

    #[tokio::test]
    async fn second_add_of_same_address_already_exists() {
        let mock_app = gen_mock_app().await;

        let (status, cookie) = post(&mock_app.app, favorite_body("1 City Hall Sq"), None).await;
        assert_eq!(status, "success");
        let cookie = cookie.expect("Expected a session cookie");

        let (status, second_cookie) =
            post(&mock_app.app, favorite_body("1 City Hall Sq"), Some(&cookie)).await;
        assert_eq!(status, "already_exists");
        assert!(second_cookie.is_none());

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::COOKIE, cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8_lossy(&body);
        assert_eq!(html.matches("data-favorite-action=\"remove\"").count(), 1);
    }

    #[tokio::test]
    async fn invalid_payload_is_bad_request() {
        let mock_app = gen_mock_app().await;

        let mut body = favorite_body("1 City Hall Sq");
        body["latitude"] = serde_json::json!(123.0);

        let response = mock_app
            .app
            .oneshot(json_request("/add_favorite", body, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn blank_station_name_is_bad_request() {
        let mock_app = gen_mock_app().await;

        let mut body = favorite_body("1 City Hall Sq");
        body["station"]["name"] = serde_json::json!(" ");

        let response = mock_app
            .app
            .oneshot(json_request("/add_favorite", body, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn many_favorites_with_long_addresses_all_persist() {
        let mock_app = gen_mock_app().await;
        let address = |i: usize| {
            format!(
                "Massachusetts State House, {} Beacon Street, Beacon Hill, Boston, \
                 Massachusetts 02133, United States",
                i
            )
        };

        let (status, cookie) = post(&mock_app.app, favorite_body(&address(0)), None).await;
        assert_eq!(status, "success");
        let cookie = cookie.expect("Expected a session cookie");

        for i in 1..20 {
            let (status, next_cookie) =
                post(&mock_app.app, favorite_body(&address(i)), Some(&cookie)).await;
            assert_eq!(status, "success");

            let next_cookie = next_cookie.expect("Expected a session cookie");
            assert_eq!(next_cookie, cookie);
            assert!(next_cookie.len() < 200, "cookie was {} bytes", next_cookie.len());
        }

        let session = mock_app
            .state
            .sessions
            .load(&jar_from(&mock_app.state, &cookie))
            .await;
        assert_eq!(session.favorites.len(), 20);
        assert_eq!(session.favorites[19].resolved_address, address(19));
        assert_eq!(session.favorites[19].station_name, "Government Center");
    }
}
