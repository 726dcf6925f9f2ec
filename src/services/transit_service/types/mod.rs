pub mod mbta_predictions_response;
pub mod mbta_resource;
pub mod mbta_routes_response;
pub mod mbta_stops_response;
pub mod transit_service_error;
