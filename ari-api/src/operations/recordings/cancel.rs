//! Cancel operation for the live recordings resource

use rest_client::Method;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::operation::AriOperation;

/// Stop a live recording and discard it
pub struct CancelRecordingOperation;

/// Request for cancelling a recording
#[derive(Debug, Clone, Serialize)]
pub struct CancelRecordingRequest {
    pub recording_name: String,
}

/// Response for cancelling a recording (no body)
#[derive(Debug, Deserialize)]
pub struct CancelRecordingResponse;

impl AriOperation for CancelRecordingOperation {
    type Request = CancelRecordingRequest;
    type Response = CancelRecordingResponse;

    const METHOD: Method = Method::Delete;

    fn path(request: &Self::Request) -> String {
        format!("/recordings/live/{}", request.recording_name)
    }

    fn query(_request: &Self::Request) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn parse_response(_body: Option<&str>) -> Result<Self::Response, ApiError> {
        Ok(CancelRecordingResponse)
    }
}
