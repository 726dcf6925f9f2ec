use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use chrono_tz::Tz;

use crate::{
    services::{
        station_lookup_service::StationLookupService, transit_service::mbta_client::TransitCatalog,
    },
    utils::{session_store::SessionStore, templates::Templates},
};

#[derive(Clone)]
pub struct AppState {
    pub lookup_service: StationLookupService,
    pub transit: Arc<dyn TransitCatalog>,
    pub templates: Arc<Templates>,
    pub cookie_key: Key,
    pub sessions: SessionStore,
    pub display_timezone: Tz,
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}
