use std::{env, time::Duration};

use chrono_tz::Tz;
use thiserror::Error;

const DEFAULT_MAPBOX_HOST: &str = "https://api.mapbox.com";
const DEFAULT_MBTA_HOST: &str = "https://api-v3.mbta.com";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SESSION_IDLE_MINUTES: u64 = 24 * 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid timezone: {value}")]
    InvalidTimezone { var: &'static str, value: String },

    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("failed to load templates: {0}")]
    Templates(#[from] tera::Error),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mapbox_host: String,
    /// Without a token every geocode request fails.
    pub mapbox_token: Option<String>,
    pub mbta_host: String,
    /// Optional; MBTA serves unauthenticated requests at a lower rate limit.
    pub mbta_key: Option<String>,
    pub session_secret: Option<String>,
    pub bind_addr: String,
    pub display_timezone: Tz,
    pub http_timeout: Duration,
    /// Sessions untouched for this long are dropped from the store.
    pub session_idle_timeout: Duration,
}

impl AppConfig {
    /// Reads the process environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let display_timezone = match var("DISPLAY_TIMEZONE") {
            Some(value) => value
                .parse::<Tz>()
                .map_err(|_| ConfigError::InvalidTimezone {
                    var: "DISPLAY_TIMEZONE",
                    value,
                })?,
            None => chrono_tz::America::New_York,
        };

        let positive = |name: &'static str, default: u64| match var(name) {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(n) if n > 0 => Ok(n),
                _ => Err(ConfigError::InvalidNumber { var: name, value }),
            },
            None => Ok(default),
        };

        let http_timeout_secs = positive("HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?;
        let session_idle_minutes =
            positive("SESSION_IDLE_MINUTES", DEFAULT_SESSION_IDLE_MINUTES)?;

        Ok(AppConfig {
            mapbox_host: var("MAPBOX_HOST").unwrap_or_else(|| DEFAULT_MAPBOX_HOST.to_string()),
            mapbox_token: var("MAPBOX_TOKEN"),
            mbta_host: var("MBTA_HOST").unwrap_or_else(|| DEFAULT_MBTA_HOST.to_string()),
            mbta_key: var("MBTA_API_KEY"),
            session_secret: var("SESSION_SECRET"),
            bind_addr: var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            display_timezone,
            http_timeout: Duration::from_secs(http_timeout_secs),
            session_idle_timeout: Duration::from_secs(session_idle_minutes * 60),
        })
    }
}
