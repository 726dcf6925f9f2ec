use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapsServiceError {
    #[error("geocoding token is not configured")]
    MissingCredentials,

    #[error("failed to send request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("geocoding service responded with status {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to parse response body: {0}")]
    Parse(String),
}
