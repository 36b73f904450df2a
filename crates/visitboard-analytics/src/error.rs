//! Errors that can occur while retrieving visit counts.

/// Errors that can occur when fetching a visit summary.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Analytics service returned HTTP {status}")]
    RemoteService { status: u16 },

    #[error("Malformed analytics response: {0}")]
    MalformedResponse(String),

    #[error("Analytics configuration error: {0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Fetching is disabled during static builds")]
    Disabled,
}

impl FetchError {
    /// Whether the failure happened before any request was sent.
    pub fn is_local(&self) -> bool {
        matches!(self, FetchError::Configuration(_) | FetchError::Disabled)
    }
}
