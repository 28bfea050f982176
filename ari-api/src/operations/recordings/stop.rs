//! Stop operation for the live recordings resource

use rest_client::Method;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::operation::AriOperation;

/// Stop a live recording and store it
pub struct StopRecordingOperation;

/// Request for stopping a recording
#[derive(Debug, Clone, Serialize)]
pub struct StopRecordingRequest {
    pub recording_name: String,
}

/// Response for stopping a recording (no body)
#[derive(Debug, Deserialize)]
pub struct StopRecordingResponse;

impl AriOperation for StopRecordingOperation {
    type Request = StopRecordingRequest;
    type Response = StopRecordingResponse;

    const METHOD: Method = Method::Post;

    fn path(request: &Self::Request) -> String {
        format!("/recordings/live/{}/stop", request.recording_name)
    }

    fn query(_request: &Self::Request) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn parse_response(_body: Option<&str>) -> Result<Self::Response, ApiError> {
        Ok(StopRecordingResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path() {
        let request = StopRecordingRequest {
            recording_name: "meeting".to_string(),
        };
        assert_eq!(
            StopRecordingOperation::path(&request),
            "/recordings/live/meeting/stop"
        );
    }
}
