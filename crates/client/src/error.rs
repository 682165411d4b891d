use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Failure taxonomy for CMS requests.
///
/// Screens map these to a visible error state; nothing here is expected to
/// propagate as a panic.
#[derive(Error, Debug)]
pub enum ClientError {
    /// No connectivity or request timeout.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response from the CMS.
    #[error("http status {status}")]
    Http { status: u16 },

    /// Payload did not match the expected envelope shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Detail fetch for an identifier the CMS does not know.
    #[error("{resource} {id} not found")]
    NotFound { resource: String, id: u64 },
}

impl ClientError {
    /// Transient failures worth another attempt: connectivity problems and
    /// server-side 5xx. Client errors (4xx) and decode failures are final.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Network(_) => true,
            ClientError::Http { status } => *status >= 500,
            ClientError::Decode(_) | ClientError::NotFound { .. } => false,
        }
    }
}
