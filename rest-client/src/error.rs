//! Error types for the REST client

use thiserror::Error;

/// Errors that can occur while talking to the ARI HTTP endpoints
///
/// Asterisk reports operation failures through HTTP status codes with a JSON
/// body of the form `{"message": "..."}`. Each status the ARI contract uses
/// gets its own variant so callers can match on the failure kind directly.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network or HTTP communication error
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// 400 Bad Request: an operation parameter was invalid
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// 404 Not Found: the resource does not exist
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// 409 Conflict: the resource is in a state that rejects the operation
    #[error("Conflict: {0}")]
    Conflict(String),

    /// 422 Unprocessable Entity: the request was understood but cannot be applied
    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    /// Any other non-2xx status
    #[error("Server returned HTTP {0}: {1}")]
    Server(u16, String),
}

impl HttpError {
    /// Map an HTTP error status to its typed variant
    pub fn from_status(code: u16, message: String) -> Self {
        match code {
            400 => Self::InvalidParameter(message),
            404 => Self::NotFound(message),
            409 => Self::Conflict(message),
            422 => Self::UnprocessableEntity(message),
            _ => Self::Server(code, message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_mapping() {
        assert!(matches!(
            HttpError::from_status(400, String::new()),
            HttpError::InvalidParameter(_)
        ));
        assert!(matches!(
            HttpError::from_status(404, String::new()),
            HttpError::NotFound(_)
        ));
        assert!(matches!(
            HttpError::from_status(409, String::new()),
            HttpError::Conflict(_)
        ));
        assert!(matches!(
            HttpError::from_status(422, String::new()),
            HttpError::UnprocessableEntity(_)
        ));
        assert!(matches!(
            HttpError::from_status(500, String::new()),
            HttpError::Server(500, _)
        ));
    }

    #[test]
    fn test_error_display() {
        let err = HttpError::NotFound("Bridge not found".to_string());
        assert_eq!(format!("{}", err), "Resource not found: Bridge not found");

        let err = HttpError::Server(503, "busy".to_string());
        assert_eq!(format!("{}", err), "Server returned HTTP 503: busy");
    }
}
