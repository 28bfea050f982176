//! Pause operations for the live recordings resource
//!
//! Pausing is idempotent on the ARI side; pausing a paused recording and
//! unpausing a running one both succeed.

use rest_client::Method;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::operation::AriOperation;

/// Pause a live recording
pub struct PauseRecordingOperation;

/// Request for pausing a recording
#[derive(Debug, Clone, Serialize)]
pub struct PauseRecordingRequest {
    pub recording_name: String,
}

/// Response for pausing a recording (no body)
#[derive(Debug, Deserialize)]
pub struct PauseRecordingResponse;

impl AriOperation for PauseRecordingOperation {
    type Request = PauseRecordingRequest;
    type Response = PauseRecordingResponse;

    const METHOD: Method = Method::Post;

    fn path(request: &Self::Request) -> String {
        format!("/recordings/live/{}/pause", request.recording_name)
    }

    fn query(_request: &Self::Request) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn parse_response(_body: Option<&str>) -> Result<Self::Response, ApiError> {
        Ok(PauseRecordingResponse)
    }
}

/// Resume a paused live recording
pub struct UnpauseRecordingOperation;

/// Request for resuming a recording
#[derive(Debug, Clone, Serialize)]
pub struct UnpauseRecordingRequest {
    pub recording_name: String,
}

/// Response for resuming a recording (no body)
#[derive(Debug, Deserialize)]
pub struct UnpauseRecordingResponse;

impl AriOperation for UnpauseRecordingOperation {
    type Request = UnpauseRecordingRequest;
    type Response = UnpauseRecordingResponse;

    const METHOD: Method = Method::Delete;

    fn path(request: &Self::Request) -> String {
        format!("/recordings/live/{}/pause", request.recording_name)
    }

    fn query(_request: &Self::Request) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn parse_response(_body: Option<&str>) -> Result<Self::Response, ApiError> {
        Ok(UnpauseRecordingResponse)
    }
}
