use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHistoryEntry {
    pub query_text: String,
    pub resolved_address: String,
    pub station_name: String,
    pub timestamp: String,
    pub user_coordinate: Coordinate,
    pub station_coordinate: Coordinate,
    pub distance_miles: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub resolved_address: String,
    pub user_coordinate: Coordinate,
    pub station_name: String,
    pub added_on: String,
}

/// Everything a single browser session remembers. Serialized into the signed
/// session cookie between requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    #[serde(default)]
    pub recent: Vec<SearchHistoryEntry>,
    #[serde(default)]
    pub favorites: Vec<FavoriteEntry>,
}
