//! Error types for catalog fetching.

use thiserror::Error;

/// Errors that can occur while fetching a catalog.
///
/// None of these are fatal: the cache records the failure and the facet
/// shows "no options" for the rest of the session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// Request could not be sent or the connection failed.
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status.
    #[error("catalog endpoint {url} returned {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    /// The response body was not the expected JSON array.
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// Endpoint configuration is unusable.
    #[error("invalid endpoint configuration: {0}")]
    Config(String),
}

impl CatalogError {
    /// Returns a user-friendly error message suitable for display in the UI.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Network(_) => "Could not reach the course server. Options are unavailable.",
            Self::Status { .. } => "The course server returned an error. Options are unavailable.",
            Self::JsonParse(_) => "The course server sent data we could not read.",
            Self::Config(_) => "The course server address is not configured correctly.",
        }
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::JsonParse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParse(err.to_string())
    }
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
