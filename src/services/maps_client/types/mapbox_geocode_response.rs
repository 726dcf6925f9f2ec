use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct MapboxGeocodeResponseFeatureGeometry {
    /// `[longitude, latitude]`
    pub coordinates: Vec<f64>,
}

#[derive(Serialize, Deserialize)]
pub struct MapboxGeocodeResponseFeature {
    pub place_name: String,
    pub geometry: MapboxGeocodeResponseFeatureGeometry,
}

#[derive(Serialize, Deserialize)]
pub struct MapboxGeocodeResponse {
    pub features: Vec<MapboxGeocodeResponseFeature>,
}
