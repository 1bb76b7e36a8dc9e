use thiserror::Error;

/// Failures while reading the members endpoint. This is the only error
/// surface in the app; everything downstream operates on in-memory state.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, TLS, read).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("members endpoint returned status {status}")]
    Status { status: u16 },

    /// The body was not a JSON array of member records.
    #[error("invalid members payload: {0}")]
    Decode(#[source] serde_json::Error),
}
