//! Stop operation for the playbacks resource

use rest_client::Method;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::operation::AriOperation;

/// Stop a playback
pub struct StopPlaybackOperation;

/// Request for stopping a playback
#[derive(Debug, Clone, Serialize)]
pub struct StopPlaybackRequest {
    pub playback_id: String,
}

/// Response for stopping a playback (no body)
#[derive(Debug, Deserialize)]
pub struct StopPlaybackResponse;

impl AriOperation for StopPlaybackOperation {
    type Request = StopPlaybackRequest;
    type Response = StopPlaybackResponse;

    const METHOD: Method = Method::Delete;

    fn path(request: &Self::Request) -> String {
        format!("/playbacks/{}", request.playback_id)
    }

    fn query(_request: &Self::Request) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn parse_response(_body: Option<&str>) -> Result<Self::Response, ApiError> {
        Ok(StopPlaybackResponse)
    }
}
