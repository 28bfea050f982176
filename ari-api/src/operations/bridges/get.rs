//! Get operation for the bridges resource

use rest_client::Method;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::BridgeInfo;
use crate::operation::{decode_json, AriOperation};

/// Get the details of a single bridge
pub struct GetBridgeOperation;

/// Request for fetching one bridge
#[derive(Debug, Clone, Serialize)]
pub struct GetBridgeRequest {
    pub bridge_id: String,
}

impl AriOperation for GetBridgeOperation {
    type Request = GetBridgeRequest;
    type Response = BridgeInfo;

    const METHOD: Method = Method::Get;

    fn path(request: &Self::Request) -> String {
        format!("/bridges/{}", request.bridge_id)
    }

    fn query(_request: &Self::Request) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn parse_response(body: Option<&str>) -> Result<Self::Response, ApiError> {
        decode_json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_contains_bridge_id() {
        let request = GetBridgeRequest {
            bridge_id: "b1".to_string(),
        };
        assert_eq!(GetBridgeOperation::path(&request), "/bridges/b1");
    }

    #[test]
    fn test_response_parsing() {
        let body = r#"{
            "id": "b1",
            "name": "conference",
            "technology": "simple_bridge",
            "bridge_type": "mixing",
            "bridge_class": "stasis",
            "creator": "Stasis",
            "channels": []
        }"#;

        let bridge = GetBridgeOperation::parse_response(Some(body)).unwrap();
        assert_eq!(bridge.id, "b1");
        assert_eq!(bridge.name, "conference");
    }

    #[test]
    fn test_missing_body_is_parse_error() {
        assert!(matches!(
            GetBridgeOperation::parse_response(None),
            Err(ApiError::Parse(_))
        ));
    }
}
