use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResourceIdentifier {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// JSON:API relationship linkage, either to-one or to-many.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RelationshipData {
    One(ResourceIdentifier),
    Many(Vec<ResourceIdentifier>),
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Relationship {
    #[serde(default)]
    pub data: Option<RelationshipData>,
}

impl Relationship {
    pub fn ids(&self) -> Vec<&str> {
        match &self.data {
            Some(RelationshipData::One(r)) => vec![r.id.as_str()],
            Some(RelationshipData::Many(rs)) => rs.iter().map(|r| r.id.as_str()).collect(),
            None => Vec::new(),
        }
    }

    pub fn first_id(&self) -> Option<&str> {
        self.ids().into_iter().next()
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RouteAttributes {
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub long_name: Option<String>,
    #[serde(default, rename = "type")]
    pub route_type: Option<u8>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteResource {
    pub id: String,
    #[serde(default)]
    pub attributes: RouteAttributes,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TripAttributes {
    #[serde(default)]
    pub headsign: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TripResource {
    pub id: String,
    #[serde(default)]
    pub attributes: TripAttributes,
}

/// Entry of a side-loaded `included` batch. Kinds this service never joins
/// against collapse into `Other`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IncludedResource {
    Route(RouteResource),
    Trip(TripResource),
    #[serde(other)]
    Other,
}
