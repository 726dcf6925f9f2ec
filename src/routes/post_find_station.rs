use std::collections::BTreeSet;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
#[cfg(test)]
use axum_macros::debug_handler;
use axum_extra::extract::{cookie::SignedCookieJar, Form, FormRejection};
use chrono::Utc;
use serde::Deserialize;
use tracing::warn;
use validator::Validate;

use super::session_context;
use crate::{
    services::{
        station_lookup_service::{LookupError, NotFoundStage},
        transit_service::mbta_client::SCHEDULED_PLACEHOLDER,
        user_history::record_search,
    },
    types::{
        app_state::AppState,
        transit::{ArrivalPrediction, RouteType},
    },
    utils::validators::non_blank,
};

const MISSING_LOCATION: &str = "Please enter a place name or address";

#[derive(Validate, Deserialize)]
pub struct FindStationPayload {
    #[serde(default)]
    #[validate(custom(function = "non_blank"))]
    pub location: String,

    /// Repeated key, one value per checked route type.
    #[serde(default)]
    pub route_type: Vec<String>,
}

fn parse_route_types(values: &[String]) -> BTreeSet<RouteType> {
    values
        .iter()
        .filter_map(|v| {
            let parsed = RouteType::parse_form_value(v);
            if parsed.is_none() {
                warn!("Ignoring unknown route type {:?}", v);
            }
            parsed
        })
        .flatten()
        .collect()
}

fn not_found_message(stage: NotFoundStage, location: &str) -> String {
    match stage {
        NotFoundStage::Location => format!(
            "Could not find a location matching '{}'. Please try a different place name or address.",
            location
        ),
        NotFoundStage::Station => format!(
            "Could not find a nearby MBTA station for '{}'. Please try a different location in the Boston area.",
            location
        ),
    }
}

/// Arrivals worth a table row. Entries whose time could not be read are kept
/// in the data but not shown.
fn displayable_arrivals(arrivals: &[ArrivalPrediction]) -> Vec<&ArrivalPrediction> {
    arrivals
        .iter()
        .filter(|a| a.arrival_time_display != SCHEDULED_PLACEHOLDER)
        .collect()
}

#[cfg_attr(test, debug_handler)]
pub async fn post_find_station(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    form: Result<Form<FindStationPayload>, FormRejection>,
) -> Response {
    let mut session = state.sessions.load(&jar).await;
    let mut context = session_context(&session);

    let payload = match form {
        Ok(Form(payload)) => payload,
        Err(e) => {
            warn!("Rejected search form: {}", e);
            context.insert("error_message", MISSING_LOCATION);
            return state.templates.page("index.html", &context);
        }
    };

    let location = payload.location.trim().to_string();
    context.insert("location", &location);

    if payload.validate().is_err() {
        context.insert("error_message", MISSING_LOCATION);
        return state.templates.page("index.html", &context);
    }

    let route_types = parse_route_types(&payload.route_type);

    let result = match state.lookup_service.lookup(&location, &route_types).await {
        Ok(result) => result,
        Err(LookupError::NotFound(stage)) => {
            context.insert("error_message", &not_found_message(stage, &location));
            return state.templates.page("index.html", &context);
        }
    };

    let timestamp = Utc::now()
        .with_timezone(&state.display_timezone)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string();
    record_search(&mut session, &result, timestamp);

    let mut context = session_context(&session);
    context.insert(
        "is_favorite",
        &session
            .favorites
            .iter()
            .any(|f| f.resolved_address == result.address),
    );
    context.insert("arrivals", &displayable_arrivals(&result.arrivals));
    context.insert("result", &result);

    let page = state.templates.page("station.html", &context);
    (state.sessions.save(jar, session).await, page).into_response()
}
