//! Get operation for the playbacks resource

use rest_client::Method;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::PlaybackInfo;
use crate::operation::{decode_json, AriOperation};

/// Get the details of a playback
pub struct GetPlaybackOperation;

/// Request for fetching one playback
#[derive(Debug, Clone, Serialize)]
pub struct GetPlaybackRequest {
    pub playback_id: String,
}

impl AriOperation for GetPlaybackOperation {
    type Request = GetPlaybackRequest;
    type Response = PlaybackInfo;

    const METHOD: Method = Method::Get;

    fn path(request: &Self::Request) -> String {
        format!("/playbacks/{}", request.playback_id)
    }

    fn query(_request: &Self::Request) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn parse_response(body: Option<&str>) -> Result<Self::Response, ApiError> {
        decode_json(body)
    }
}
