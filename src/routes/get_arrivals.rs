use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::types::{app_state::AppState, transit::ArrivalPrediction};

const ARRIVAL_LIMIT: usize = 5;

#[derive(Serialize, Deserialize)]
pub struct ArrivalsResponse {
    pub arrivals: Vec<ArrivalPrediction>,
}

pub async fn get_arrivals(
    State(state): State<AppState>,
    Path(station_id): Path<String>,
) -> Json<ArrivalsResponse> {
    let arrivals = state
        .transit
        .get_arrival_predictions(&station_id, ARRIVAL_LIMIT)
        .await;

    Json(ArrivalsResponse { arrivals })
}
