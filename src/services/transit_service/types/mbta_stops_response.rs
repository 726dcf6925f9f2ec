use serde::{Deserialize, Serialize};

use super::mbta_resource::{IncludedResource, Relationship};

#[derive(Debug, Deserialize, Serialize)]
pub struct StopAttributes {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// 0 unknown, 1 accessible, 2 inaccessible.
    #[serde(default)]
    pub wheelchair_boarding: Option<u8>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StopRelationships {
    #[serde(default)]
    pub route: Relationship,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct StopResource {
    pub id: String,
    pub attributes: StopAttributes,
    #[serde(default)]
    pub relationships: StopRelationships,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct MbtaStopsResponse {
    pub data: Vec<StopResource>,
    #[serde(default)]
    pub included: Vec<IncludedResource>,
}
