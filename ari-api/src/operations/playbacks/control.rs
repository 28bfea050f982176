//! Control operation for the playbacks resource

use rest_client::Method;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::operation::AriOperation;

/// Control operations a playback accepts while running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaybackControl {
    /// Restart the media from the beginning
    Restart,
    /// Pause the playback
    Pause,
    /// Resume a paused playback
    Unpause,
    /// Skip backward by the playback's skipms
    Reverse,
    /// Skip forward by the playback's skipms
    Forward,
}

impl PlaybackControl {
    /// The operation name as ARI expects it
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaybackControl::Restart => "restart",
            PlaybackControl::Pause => "pause",
            PlaybackControl::Unpause => "unpause",
            PlaybackControl::Reverse => "reverse",
            PlaybackControl::Forward => "forward",
        }
    }
}

/// Send a control operation to a playback
pub struct ControlPlaybackOperation;

/// Request for controlling a playback
#[derive(Debug, Clone, Serialize)]
pub struct ControlPlaybackRequest {
    pub playback_id: String,
    pub operation: String,
}

/// Response for controlling a playback (no body)
#[derive(Debug, Deserialize)]
pub struct ControlPlaybackResponse;

impl AriOperation for ControlPlaybackOperation {
    type Request = ControlPlaybackRequest;
    type Response = ControlPlaybackResponse;

    const METHOD: Method = Method::Post;

    fn path(request: &Self::Request) -> String {
        format!("/playbacks/{}/control", request.playback_id)
    }

    fn query(request: &Self::Request) -> Vec<(&'static str, String)> {
        vec![("operation", request.operation.clone())]
    }

    fn parse_response(_body: Option<&str>) -> Result<Self::Response, ApiError> {
        Ok(ControlPlaybackResponse)
    }
}
