use axum::{extract::Path, Json};

use crate::services::station_directory::{station_info, StationInfo};

pub async fn get_station_info(Path(station_name): Path<String>) -> Json<StationInfo> {
    Json(station_info(&station_name))
}
