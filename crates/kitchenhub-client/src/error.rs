//! KitchenHub API client error types.

/// Errors from KitchenHub API calls.
#[derive(Debug, thiserror::Error)]
pub enum HubApiError {
    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The backend returned a non-2xx status.
    #[error("KitchenHub API {endpoint} returned {status}: {body}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The operation requires a logged-in session and none was provided.
    /// Raised before any request is sent.
    #[error("{operation} requires a logged-in session")]
    NotAuthenticated { operation: &'static str },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),
}
