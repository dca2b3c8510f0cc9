//! Fetcher error types.

/// Errors from fetching a JSON document over HTTP.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Connection failed, timed out, or the body could not be read
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// Body was not valid JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },
}
