use std::sync::Arc;

use crate::{
    config::{AppConfig, ConfigError},
    routes::{apply_routes, not_found::not_found},
    services::{
        maps_client::maps_service::{MapsService, MapsServiceConfig},
        station_lookup_service::{LookupOptions, StationLookupService},
        transit_service::mbta_client::{MbtaClient, MbtaClientConfig},
    },
    types::app_state::AppState,
    utils::{
        session_store::{cookie_key, SessionStore},
        templates::Templates,
    },
};
use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

const MAX_SESSIONS: u64 = 10_000;

pub fn gen_state(config: AppConfig) -> Result<AppState, ConfigError> {
    let maps_service = MapsService::new(MapsServiceConfig {
        api_key: config.mapbox_token,
        host: config.mapbox_host,
        timeout: config.http_timeout,
    });
    let mbta_client = Arc::new(MbtaClient::new(MbtaClientConfig {
        api_key: config.mbta_key,
        host: config.mbta_host,
        timeout: config.http_timeout,
        display_timezone: config.display_timezone,
    }));

    Ok(AppState {
        lookup_service: StationLookupService::new(
            Arc::new(maps_service),
            mbta_client.clone(),
            LookupOptions::default(),
        ),
        transit: mbta_client,
        templates: Arc::new(Templates::new()?),
        cookie_key: cookie_key(config.session_secret.as_deref()),
        sessions: SessionStore::new(MAX_SESSIONS, config.session_idle_timeout),
        display_timezone: config.display_timezone,
    })
}

pub fn gen_app(state: AppState) -> Router {
    apply_routes(Router::new())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new())
        .with_state(state)
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub mapbox_server: mockito::ServerGuard,
    pub mbta_server: mockito::ServerGuard,
    pub state: AppState,
}

#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    let mapbox_server = mockito::Server::new_async().await;
    let mbta_server = mockito::Server::new_async().await;

    let state = gen_state(AppConfig {
        mapbox_host: mapbox_server.url(),
        mapbox_token: Some("token".to_string()),
        mbta_host: mbta_server.url(),
        mbta_key: None,
        session_secret: Some("test session secret".to_string()),
        bind_addr: "127.0.0.1:0".to_string(),
        display_timezone: chrono_tz::America::New_York,
        http_timeout: std::time::Duration::from_secs(5),
        session_idle_timeout: std::time::Duration::from_secs(60 * 60),
    })
    .expect("Failed to build app state");

    MockApp {
        app: gen_app(state.clone()),
        mapbox_server,
        mbta_server,
        state,
    }
}

/// Turns a response's `Set-Cookie` into a value for a follow-up request's
/// `Cookie` header.
#[cfg(test)]
pub fn session_cookie_from(response: &axum::response::Response) -> Option<String> {
    response
        .headers()
        .get_all(axum::http::header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with(crate::utils::session_store::SESSION_COOKIE))
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

/// Builds a request jar carrying `cookie`, signed with the app's key.
#[cfg(test)]
pub fn jar_from(state: &AppState, cookie: &str) -> axum_extra::extract::cookie::SignedCookieJar {
    let mut headers = axum::http::HeaderMap::new();
    if let Ok(value) = cookie.parse() {
        headers.insert(axum::http::header::COOKIE, value);
    }
    axum_extra::extract::cookie::SignedCookieJar::from_headers(&headers, state.cookie_key.clone())
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn unknown_path_renders_not_found_page() {
        let mock_app = gen_mock_app().await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/no/such/page")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(String::from_utf8_lossy(&body).contains("Page not found"));
    }
}
