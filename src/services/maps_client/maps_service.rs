use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use urlencoding::encode;

use super::types::{
    mapbox_geocode_response::MapboxGeocodeResponse, maps_service_error::MapsServiceError,
};
use crate::types::coordinate::Coordinate;

/// Proximity bias for every query, `longitude,latitude` of Boston City Hall.
const BOSTON_PROXIMITY: &str = "-71.0589,42.3601";

#[derive(Clone)]
pub struct MapsServiceConfig {
    pub api_key: Option<String>,
    pub host: String,
    pub timeout: Duration,
}

#[derive(Clone)]
pub struct MapsService {
    config: MapsServiceConfig,
    client: reqwest::Client,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeResult {
    pub coordinate: Coordinate,
    pub formatted_address: String,
}

#[async_trait]
pub trait Geocoder: Send + Sync {
    /// `Ok(None)` means the provider answered but matched nothing.
    async fn geocode(&self, query: &str) -> Result<Option<GeocodeResult>, MapsServiceError>;
}

impl MapsService {
    pub fn new(config: MapsServiceConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Geocoder for MapsService {
    async fn geocode(&self, query: &str) -> Result<Option<GeocodeResult>, MapsServiceError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(MapsServiceError::MissingCredentials)?;

        let url = format!(
            "{}/geocoding/v5/mapbox.places/{}.json?access_token={}&types=poi,address&limit=1&proximity={}",
            self.config.host,
            encode(query),
            encode(api_key),
            BOSTON_PROXIMITY
        );

        let resp = self
            .client
            .get(&url)
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(MapsServiceError::Request)?;

        if !resp.status().is_success() {
            return Err(MapsServiceError::Status(resp.status()));
        }

        let body = resp
            .json::<MapboxGeocodeResponse>()
            .await
            .map_err(|e| MapsServiceError::Parse(e.to_string()))?;

        let feature = match body.features.into_iter().next() {
            Some(f) => f,
            None => {
                debug!("No geocoding match for {:?}", query);
                return Ok(None);
            }
        };

        let coordinate = match feature.geometry.coordinates[..] {
            [longitude, latitude, ..] => Coordinate::checked(latitude, longitude).ok_or_else(|| {
                MapsServiceError::Parse(format!(
                    "coordinate out of range: [{}, {}]",
                    longitude, latitude
                ))
            })?,
            _ => {
                return Err(MapsServiceError::Parse(format!(
                    "expected [lon, lat], got {} values",
                    feature.geometry.coordinates.len()
                )))
            }
        };

        Ok(Some(GeocodeResult {
            coordinate,
            formatted_address: feature.place_name,
        }))
    }
}
