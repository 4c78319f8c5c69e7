//! Terralens error types

/// Terralens error types
#[derive(Debug, thiserror::Error)]
pub enum TerralensError {
    // Network errors
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("empty response from endpoint")]
    EmptyResponse,

    // Location errors
    #[error("geolocation unavailable: {0}")]
    Geolocation(String),

    // Export errors
    #[error("export failed: {0}")]
    Export(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for TerralensError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            TerralensError::Api {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            TerralensError::Http(err.to_string())
        }
    }
}

/// Result type alias for Terralens operations
pub type Result<T> = std::result::Result<T, TerralensError>;
