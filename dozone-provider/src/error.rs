//! Error types for dozone-provider.

use thiserror::Error;

/// All errors that can arise while talking to the DNS host.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The domain or record does not exist (HTTP 404).
    #[error("not found: {0}")]
    NotFound(String),

    /// The token was rejected (HTTP 401/403).
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Any other non-success status.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// DNS resolution, connection, TLS, or timeout failure.
    #[error("transport error: {0}")]
    Transport(#[source] Box<ureq::Transport>),

    /// The response body could not be read or decoded.
    #[error("failed to decode response: {0}")]
    Decode(#[from] std::io::Error),

    /// A destroy was requested for a record that was never fetched.
    #[error("record '{0}' has no provider id")]
    MissingRecordId(String),

    /// The provider returned a record that violates the record model.
    #[error("invalid record from provider: {0}")]
    InvalidRecord(String),
}

impl ProviderError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::NotFound(_))
    }
}

impl From<ureq::Error> for ProviderError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(status, response) => {
                let message = response
                    .into_json::<ApiErrorBody>()
                    .map(|body| body.message)
                    .unwrap_or_else(|_| format!("HTTP {status}"));
                match status {
                    401 | 403 => ProviderError::Unauthorized(message),
                    404 => ProviderError::NotFound(message),
                    _ => ProviderError::Api { status, message },
                }
            }
            ureq::Error::Transport(transport) => ProviderError::Transport(Box::new(transport)),
        }
    }
}

/// Error payload returned by the DigitalOcean API.
#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    message: String,
}
