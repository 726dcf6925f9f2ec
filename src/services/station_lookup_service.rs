use std::{collections::BTreeSet, sync::Arc};

use thiserror::Error;
use tracing::{error, info};

use super::{maps_client::maps_service::Geocoder, transit_service::mbta_client::TransitCatalog};
use crate::{
    types::{lookup_result::LookupResult, transit::RouteType},
    utils::distance::haversine_miles,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundStage {
    Location,
    Station,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("{0:?} not found")]
    NotFound(NotFoundStage),
}

#[derive(Debug, Clone, Copy)]
pub struct LookupOptions {
    pub include_arrivals: bool,
    pub arrival_limit: usize,
}

impl Default for LookupOptions {
    fn default() -> Self {
        LookupOptions {
            include_arrivals: true,
            arrival_limit: 5,
        }
    }
}

#[derive(Clone)]
pub struct StationLookupService {
    geocoder: Arc<dyn Geocoder>,
    transit: Arc<dyn TransitCatalog>,
    options: LookupOptions,
}

impl StationLookupService {
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        transit: Arc<dyn TransitCatalog>,
        options: LookupOptions,
    ) -> Self {
        StationLookupService {
            geocoder,
            transit,
            options,
        }
    }

    /// Resolves `query` to the nearest station. Each stage that comes back
    /// empty stops the lookup.
    pub async fn lookup(
        &self,
        query: &str,
        route_types: &BTreeSet<RouteType>,
    ) -> Result<LookupResult, LookupError> {
        let geocoded = match self.geocoder.geocode(query).await {
            Ok(Some(g)) => g,
            Ok(None) => return Err(LookupError::NotFound(NotFoundStage::Location)),
            Err(e) => {
                error!("Failed to geocode {:?}: {}", query, e);
                return Err(LookupError::NotFound(NotFoundStage::Location));
            }
        };

        let mut station = self
            .transit
            .find_nearby_stations(geocoded.coordinate, route_types, 1)
            .await
            .into_iter()
            .next()
            .ok_or(LookupError::NotFound(NotFoundStage::Station))?;

        if station.routes.is_empty() {
            station.routes = self.transit.get_routes_for_station(&station.id).await;
        }

        let distance_miles = haversine_miles(geocoded.coordinate, station.coordinate);

        let arrivals = if self.options.include_arrivals {
            self.transit
                .get_arrival_predictions(&station.id, self.options.arrival_limit)
                .await
        } else {
            Vec::new()
        };

        info!(
            "Resolved {:?} to station {} ({} mi)",
            query, station.name, distance_miles
        );

        Ok(LookupResult {
            query: query.to_string(),
            address: geocoded.formatted_address,
            user_coordinate: geocoded.coordinate,
            station,
            distance_miles,
            arrivals,
        })
    }
}
