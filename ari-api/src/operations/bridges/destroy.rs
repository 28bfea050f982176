//! Destroy operation for the bridges resource

use rest_client::Method;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::operation::AriOperation;

/// Shut down a bridge
///
/// Channels in the bridge are removed and resume whatever they were doing
/// beforehand.
pub struct DestroyBridgeOperation;

/// Request for destroying a bridge
#[derive(Debug, Clone, Serialize)]
pub struct DestroyBridgeRequest {
    pub bridge_id: String,
}

/// Response for destroying a bridge (no body)
#[derive(Debug, Deserialize)]
pub struct DestroyBridgeResponse;

impl AriOperation for DestroyBridgeOperation {
    type Request = DestroyBridgeRequest;
    type Response = DestroyBridgeResponse;

    const METHOD: Method = Method::Delete;

    fn path(request: &Self::Request) -> String {
        format!("/bridges/{}", request.bridge_id)
    }

    fn query(_request: &Self::Request) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn parse_response(_body: Option<&str>) -> Result<Self::Response, ApiError> {
        Ok(DestroyBridgeResponse)
    }
}
