use serde::{Deserialize, Serialize};

use super::{
    coordinate::Coordinate,
    transit::{ArrivalPrediction, Station},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupResult {
    pub query: String,
    pub address: String,
    pub user_coordinate: Coordinate,
    pub station: Station,
    pub distance_miles: f64,
    pub arrivals: Vec<ArrivalPrediction>,
}
