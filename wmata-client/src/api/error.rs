//! WMATA API error types.

/// Errors from the WMATA HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse a JSON response body
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Failed to decode a GTFS-realtime protobuf body
    #[error("feed decode error: {message}")]
    Decode { message: String },

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Invalid API key or unauthorized
    #[error("unauthorized (invalid API key)")]
    Unauthorized,

    /// Rate limited by the API
    #[error("rate limited by the WMATA API")]
    RateLimited,
}
