pub mod maps_client;
pub mod station_directory;
pub mod station_lookup_service;
pub mod transit_service;
pub mod user_history;
