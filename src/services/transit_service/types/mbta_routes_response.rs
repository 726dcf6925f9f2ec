use serde::{Deserialize, Serialize};

use super::mbta_resource::RouteResource;

#[derive(Debug, Deserialize, Serialize)]
pub struct MbtaRoutesResponse {
    pub data: Vec<RouteResource>,
}
