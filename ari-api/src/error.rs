use rest_client::HttpError;
use thiserror::Error;

/// High-level API errors for ARI operations
///
/// Asterisk signals operation failures through a small set of HTTP statuses;
/// those arrive here unchanged from the transport layer. This crate adds no
/// validation of its own, so every variant except `Parse` originates on the
/// server or the network.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network communication error
    #[error("Network error: {0}")]
    Network(String),

    /// Response body could not be decoded into the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// An operation parameter was rejected by Asterisk (HTTP 400)
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The bridge, channel, playback, or recording does not exist (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// The resource is in a state that rejects the operation (HTTP 409)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The request was understood but cannot be applied (HTTP 422)
    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    /// Any other HTTP error status
    #[error("Server error: HTTP {0}: {1}")]
    Server(u16, String),
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

impl From<HttpError> for ApiError {
    fn from(error: HttpError) -> Self {
        match error {
            HttpError::Network(msg) => ApiError::Network(msg),
            HttpError::InvalidParameter(msg) => ApiError::InvalidParameter(msg),
            HttpError::NotFound(msg) => ApiError::NotFound(msg),
            HttpError::Conflict(msg) => ApiError::Conflict(msg),
            HttpError::UnprocessableEntity(msg) => ApiError::UnprocessableEntity(msg),
            HttpError::Server(code, msg) => ApiError::Server(code, msg),
        }
    }
}
