use serde::{Deserialize, Serialize};

use super::mbta_resource::{IncludedResource, Relationship};

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PredictionAttributes {
    #[serde(default)]
    pub arrival_time: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PredictionRelationships {
    #[serde(default)]
    pub route: Relationship,
    #[serde(default)]
    pub trip: Relationship,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PredictionResource {
    pub id: String,
    #[serde(default)]
    pub attributes: PredictionAttributes,
    #[serde(default)]
    pub relationships: PredictionRelationships,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct MbtaPredictionsResponse {
    pub data: Vec<PredictionResource>,
    #[serde(default)]
    pub included: Vec<IncludedResource>,
}
