//! Data source error types.

/// Errors from fetching network data from the upstream store.
///
/// A failed fetch is fatal for the in-flight request and is never retried
/// by the core; the boundary decides how to report it.
#[derive(Debug, thiserror::Error)]
pub enum DataSourceError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream returned an error status
    #[error("data API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the response body
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
