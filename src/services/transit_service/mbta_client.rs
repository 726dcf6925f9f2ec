use std::{collections::BTreeSet, time::Duration};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use super::{
    included_index::IncludedIndex,
    route_colors::route_from_resource,
    types::{
        mbta_predictions_response::MbtaPredictionsResponse,
        mbta_routes_response::MbtaRoutesResponse, mbta_stops_response::MbtaStopsResponse,
        transit_service_error::TransitServiceError,
    },
};
use crate::{
    types::{
        coordinate::Coordinate,
        transit::{ArrivalPrediction, Route, RouteColor, RouteType, Station},
    },
    utils::distance::haversine_miles,
};

/// Shown in place of an arrival time the upstream sent but we could not read.
pub const SCHEDULED_PLACEHOLDER: &str = "Scheduled";

const UNKNOWN: &str = "Unknown";

#[derive(Clone)]
pub struct MbtaClientConfig {
    pub api_key: Option<String>,
    pub host: String,
    pub timeout: Duration,
    pub display_timezone: Tz,
}

#[derive(Clone)]
pub struct MbtaClient {
    config: MbtaClientConfig,
    client: reqwest::Client,
}

/// Read access to the transit catalog. Upstream failures are logged and
/// surface as empty results.
#[async_trait]
pub trait TransitCatalog: Send + Sync {
    async fn find_nearby_stations(
        &self,
        coordinate: Coordinate,
        route_types: &BTreeSet<RouteType>,
        limit: usize,
    ) -> Vec<Station>;

    async fn get_routes_for_station(&self, station_id: &str) -> Vec<Route>;

    async fn get_arrival_predictions(&self, station_id: &str, limit: usize)
        -> Vec<ArrivalPrediction>;
}

impl MbtaClient {
    pub fn new(config: MbtaClientConfig) -> Self {
        MbtaClient {
            config,
            client: reqwest::Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        mut params: Vec<(&str, String)>,
    ) -> Result<T, TransitServiceError> {
        if let Some(api_key) = &self.config.api_key {
            params.push(("api_key", api_key.clone()));
        }

        let resp = self
            .client
            .get(format!("{}{}", self.config.host, path))
            .query(&params)
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(TransitServiceError::Request)?;

        if !resp.status().is_success() {
            return Err(TransitServiceError::Status(resp.status()));
        }

        resp.json::<T>()
            .await
            .map_err(|e| TransitServiceError::Parse(e.to_string()))
    }

    async fn fetch_stops(
        &self,
        coordinate: Coordinate,
        route_types: &BTreeSet<RouteType>,
    ) -> Result<MbtaStopsResponse, TransitServiceError> {
        let mut params = vec![
            ("sort", "distance".to_string()),
            ("filter[latitude]", coordinate.latitude.to_string()),
            ("filter[longitude]", coordinate.longitude.to_string()),
            ("include", "route".to_string()),
        ];

        if !route_types.is_empty() {
            let codes = route_types
                .iter()
                .map(|t| t.code().to_string())
                .collect::<Vec<String>>()
                .join(",");
            params.push(("filter[route_type]", codes));
        }

        self.get_json("/stops", params).await
    }

    async fn fetch_predictions(
        &self,
        station_id: &str,
        now: DateTime<Utc>,
    ) -> Result<MbtaPredictionsResponse, TransitServiceError> {
        let params = vec![
            ("filter[stop]", station_id.to_string()),
            ("include", "trip,route,stop".to_string()),
            ("filter[min_time]", now.to_rfc3339()),
            ("filter[max_time]", (now + prediction_window()).to_rfc3339()),
            ("sort", "time".to_string()),
        ];

        self.get_json("/predictions", params).await
    }
}

#[async_trait]
impl TransitCatalog for MbtaClient {
    async fn find_nearby_stations(
        &self,
        coordinate: Coordinate,
        route_types: &BTreeSet<RouteType>,
        limit: usize,
    ) -> Vec<Station> {
        match self.fetch_stops(coordinate, route_types).await {
            Ok(resp) => stations_from_response(&resp, coordinate, limit),
            Err(e) => {
                error!("Failed to fetch stops near {:?}: {}", coordinate, e);
                Vec::new()
            }
        }
    }

    async fn get_routes_for_station(&self, station_id: &str) -> Vec<Route> {
        let params = vec![("filter[stop]", station_id.to_string())];

        match self.get_json::<MbtaRoutesResponse>("/routes", params).await {
            Ok(resp) => resp.data.iter().map(route_from_resource).collect(),
            Err(e) => {
                error!("Failed to fetch routes for stop {}: {}", station_id, e);
                Vec::new()
            }
        }
    }

    async fn get_arrival_predictions(
        &self,
        station_id: &str,
        limit: usize,
    ) -> Vec<ArrivalPrediction> {
        let now = Utc::now();

        match self.fetch_predictions(station_id, now).await {
            Ok(resp) => arrivals_from_response(&resp, now, self.config.display_timezone, limit),
            Err(e) => {
                error!("Failed to fetch predictions for stop {}: {}", station_id, e);
                Vec::new()
            }
        }
    }
}

fn prediction_window() -> chrono::Duration {
    chrono::Duration::hours(1)
}

pub fn stations_from_response(
    resp: &MbtaStopsResponse,
    origin: Coordinate,
    limit: usize,
) -> Vec<Station> {
    let index = IncludedIndex::new(&resp.included);

    resp.data
        .iter()
        .take(limit)
        .map(|stop| {
            let coordinate = Coordinate::new(stop.attributes.latitude, stop.attributes.longitude);
            let routes = stop
                .relationships
                .route
                .ids()
                .into_iter()
                .filter_map(|id| index.route(id))
                .map(route_from_resource)
                .collect();

            Station {
                id: stop.id.clone(),
                name: stop.attributes.name.clone(),
                coordinate,
                wheelchair_accessible: stop.attributes.wheelchair_boarding == Some(1),
                routes,
                distance_from_query: Some(haversine_miles(origin, coordinate)),
            }
        })
        .collect()
}

pub fn arrivals_from_response(
    resp: &MbtaPredictionsResponse,
    now: DateTime<Utc>,
    timezone: Tz,
    limit: usize,
) -> Vec<ArrivalPrediction> {
    let index = IncludedIndex::new(&resp.included);
    let window_end = now + prediction_window();

    resp.data
        .iter()
        .filter_map(|prediction| {
            let arrival_time = prediction.attributes.arrival_time.as_deref()?;

            let arrival_time_display = match DateTime::parse_from_rfc3339(arrival_time) {
                Ok(t) if t < now || t > window_end => {
                    debug!("Dropping prediction {} outside window", prediction.id);
                    return None;
                }
                Ok(t) => t.with_timezone(&timezone).format("%-I:%M %p").to_string(),
                Err(e) => {
                    warn!(
                        "Unreadable arrival time {:?} on prediction {}: {}",
                        arrival_time, prediction.id, e
                    );
                    SCHEDULED_PLACEHOLDER.to_string()
                }
            };

            let route = prediction
                .relationships
                .route
                .first_id()
                .and_then(|id| index.route(id))
                .map(route_from_resource);
            let destination = prediction
                .relationships
                .trip
                .first_id()
                .and_then(|id| index.trip(id))
                .and_then(|t| t.attributes.headsign.clone())
                .unwrap_or_else(|| UNKNOWN.to_string());

            Some(ArrivalPrediction {
                arrival_time_display,
                route_name: route
                    .as_ref()
                    .map_or_else(|| UNKNOWN.to_string(), |r| r.short_code.clone()),
                route_color: route.map_or(RouteColor::Bus, |r| r.color),
                destination,
                status: prediction.attributes.status.clone().unwrap_or_default(),
            })
        })
        .take(limit)
        .collect()
}
