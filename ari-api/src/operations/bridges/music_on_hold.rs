//! Music-on-hold operations for the bridges resource

use rest_client::Method;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::operation::AriOperation;

/// Play music on hold to a bridge, or change the MOH class that is playing
pub struct StartMusicOnHoldOperation;

/// Request for starting music on hold
#[derive(Debug, Clone, Serialize)]
pub struct StartMusicOnHoldRequest {
    pub bridge_id: String,
    /// Music on hold class to use
    pub moh_class: Option<String>,
}

/// Response for starting music on hold (no body)
#[derive(Debug, Deserialize)]
pub struct StartMusicOnHoldResponse;

impl AriOperation for StartMusicOnHoldOperation {
    type Request = StartMusicOnHoldRequest;
    type Response = StartMusicOnHoldResponse;

    const METHOD: Method = Method::Post;

    fn path(request: &Self::Request) -> String {
        format!("/bridges/{}/moh", request.bridge_id)
    }

    fn query(request: &Self::Request) -> Vec<(&'static str, String)> {
        match &request.moh_class {
            Some(moh_class) => vec![("mohClass", moh_class.clone())],
            None => Vec::new(),
        }
    }

    fn parse_response(_body: Option<&str>) -> Result<Self::Response, ApiError> {
        Ok(StartMusicOnHoldResponse)
    }
}

/// Stop playing music on hold to a bridge
///
/// Only stops music on hold that was started via the bridge MOH endpoint.
pub struct StopMusicOnHoldOperation;

/// Request for stopping music on hold
#[derive(Debug, Clone, Serialize)]
pub struct StopMusicOnHoldRequest {
    pub bridge_id: String,
}

/// Response for stopping music on hold (no body)
#[derive(Debug, Deserialize)]
pub struct StopMusicOnHoldResponse;

impl AriOperation for StopMusicOnHoldOperation {
    type Request = StopMusicOnHoldRequest;
    type Response = StopMusicOnHoldResponse;

    const METHOD: Method = Method::Delete;

    fn path(request: &Self::Request) -> String {
        format!("/bridges/{}/moh", request.bridge_id)
    }

    fn query(_request: &Self::Request) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn parse_response(_body: Option<&str>) -> Result<Self::Response, ApiError> {
        Ok(StopMusicOnHoldResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_with_class() {
        let request = StartMusicOnHoldRequest {
            bridge_id: "b1".to_string(),
            moh_class: Some("jazz".to_string()),
        };
        assert_eq!(StartMusicOnHoldOperation::path(&request), "/bridges/b1/moh");
        assert_eq!(
            StartMusicOnHoldOperation::query(&request),
            vec![("mohClass", "jazz".to_string())]
        );
    }

    #[test]
    fn test_start_without_class_omits_parameter() {
        let request = StartMusicOnHoldRequest {
            bridge_id: "b1".to_string(),
            moh_class: None,
        };
        assert!(StartMusicOnHoldOperation::query(&request).is_empty());
    }

    #[test]
    fn test_stop_uses_delete_on_same_path() {
        let request = StopMusicOnHoldRequest {
            bridge_id: "b1".to_string(),
        };
        assert_eq!(StopMusicOnHoldOperation::path(&request), "/bridges/b1/moh");
        assert_eq!(StopMusicOnHoldOperation::METHOD, Method::Delete);
        assert!(StopMusicOnHoldOperation::query(&request).is_empty());
    }
}
