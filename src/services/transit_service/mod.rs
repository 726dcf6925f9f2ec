pub mod included_index;
pub mod mbta_client;
pub mod route_colors;
pub mod types;
