//! List operation for the bridges resource

use rest_client::Method;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::BridgeInfo;
use crate::operation::{decode_json, AriOperation};

/// List all active bridges
pub struct ListBridgesOperation;

/// Request for listing bridges (no parameters)
#[derive(Debug, Clone, Serialize)]
pub struct ListBridgesRequest;

impl AriOperation for ListBridgesOperation {
    type Request = ListBridgesRequest;
    type Response = Vec<BridgeInfo>;

    const METHOD: Method = Method::Get;

    fn path(_request: &Self::Request) -> String {
        "/bridges".to_string()
    }

    fn query(_request: &Self::Request) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn parse_response(body: Option<&str>) -> Result<Self::Response, ApiError> {
        decode_json(body)
    }
}
