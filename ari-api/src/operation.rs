use rest_client::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;

/// Base trait for all ARI operations
///
/// This trait defines the common interface that every ARI endpoint binding
/// must implement. ARI carries operation arguments in the URL path and query
/// string, so an operation describes how to build both from its typed
/// request, plus how to decode the JSON response body.
pub trait AriOperation {
    /// The request type for this operation, must be serializable
    type Request: Serialize;

    /// The response type for this operation, must be deserializable
    type Response: DeserializeOwned;

    /// The HTTP method for this operation
    const METHOD: Method;

    /// URL path for this operation, relative to the ARI base URL
    fn path(request: &Self::Request) -> String;

    /// Query parameters carried by this operation
    ///
    /// Unset optional parameters must be omitted entirely; Asterisk treats
    /// an empty value differently from an absent one.
    fn query(request: &Self::Request) -> Vec<(&'static str, String)>;

    /// Parse the response body into the typed response
    fn parse_response(body: Option<&str>) -> Result<Self::Response, ApiError>;
}

/// Decode a JSON response body into `T`
///
/// An absent body where one is expected is a parse error, not a panic.
pub(crate) fn decode_json<T: DeserializeOwned>(body: Option<&str>) -> Result<T, ApiError> {
    let body = body.ok_or_else(|| ApiError::Parse("empty response body".to_string()))?;
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}
