//! Remove-channel operation for the bridges resource

use rest_client::Method;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::operation::AriOperation;

/// Remove a channel from a bridge
pub struct RemoveChannelOperation;

/// Request for removing a channel
#[derive(Debug, Clone, Serialize)]
pub struct RemoveChannelRequest {
    pub bridge_id: String,
    /// Ids of channels to remove; allows comma separated values
    pub channel: String,
}

/// Response for removing a channel (no body)
#[derive(Debug, Deserialize)]
pub struct RemoveChannelResponse;

impl AriOperation for RemoveChannelOperation {
    type Request = RemoveChannelRequest;
    type Response = RemoveChannelResponse;

    const METHOD: Method = Method::Post;

    fn path(request: &Self::Request) -> String {
        format!("/bridges/{}/removeChannel", request.bridge_id)
    }

    fn query(request: &Self::Request) -> Vec<(&'static str, String)> {
        vec![("channel", request.channel.clone())]
    }

    fn parse_response(_body: Option<&str>) -> Result<Self::Response, ApiError> {
        Ok(RemoveChannelResponse)
    }
}
