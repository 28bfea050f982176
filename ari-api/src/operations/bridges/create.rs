//! Create operation for the bridges resource

use rest_client::Method;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::BridgeInfo;
use crate::operation::{decode_json, AriOperation};

/// Create a new bridge
///
/// The bridge is not associated with any channel until one is added.
pub struct CreateBridgeOperation;

/// Request for creating a bridge
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateBridgeRequest {
    /// Comma separated bridge types: mixing, holding, dtmf_events, proxy_media
    pub bridge_type: Option<String>,
    /// Unique id to assign to the bridge
    pub bridge_id: Option<String>,
    /// Friendly name to give the bridge
    pub name: Option<String>,
}

impl AriOperation for CreateBridgeOperation {
    type Request = CreateBridgeRequest;
    type Response = BridgeInfo;

    const METHOD: Method = Method::Post;

    fn path(_request: &Self::Request) -> String {
        "/bridges".to_string()
    }

    fn query(request: &Self::Request) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(bridge_type) = &request.bridge_type {
            query.push(("type", bridge_type.clone()));
        }
        if let Some(bridge_id) = &request.bridge_id {
            query.push(("bridgeId", bridge_id.clone()));
        }
        if let Some(name) = &request.name {
            query.push(("name", name.clone()));
        }
        query
    }

    fn parse_response(body: Option<&str>) -> Result<Self::Response, ApiError> {
        decode_json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request_has_no_query() {
        let request = CreateBridgeRequest::default();
        assert_eq!(CreateBridgeOperation::path(&request), "/bridges");
        assert!(CreateBridgeOperation::query(&request).is_empty());
    }

    #[test]
    fn test_query_includes_set_fields() {
        let request = CreateBridgeRequest {
            bridge_type: Some("mixing".to_string()),
            bridge_id: Some("conf-1".to_string()),
            name: Some("conference".to_string()),
        };

        let query = CreateBridgeOperation::query(&request);
        assert_eq!(
            query,
            vec![
                ("type", "mixing".to_string()),
                ("bridgeId", "conf-1".to_string()),
                ("name", "conference".to_string()),
            ]
        );
    }

    #[test]
    fn test_response_parsing() {
        let body = r#"{"id": "conf-1", "name": "conference", "technology": "simple_bridge", "bridge_type": "mixing", "bridge_class": "stasis"}"#;
        let bridge = CreateBridgeOperation::parse_response(Some(body)).unwrap();
        assert_eq!(bridge.id, "conf-1");
    }
}
