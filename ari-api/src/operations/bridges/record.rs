//! Record operation for the bridges resource

use rest_client::Method;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::LiveRecordingInfo;
use crate::operation::{decode_json, AriOperation};

/// Start a recording of the mixed audio from all channels in a bridge
pub struct RecordBridgeOperation;

/// Request for recording a bridge
#[derive(Debug, Clone, Serialize)]
pub struct RecordBridgeRequest {
    pub bridge_id: String,
    /// Recording's filename
    pub name: String,
    /// Format to encode audio in (wav, gsm, ...)
    pub format: String,
    /// Maximum duration of the recording in seconds; 0 for no limit
    pub max_duration_seconds: Option<u32>,
    /// Maximum duration of silence before ending the recording; 0 for no limit
    pub max_silence_seconds: Option<u32>,
    /// Action when a recording with the same name exists: fail, overwrite, append
    pub if_exists: Option<String>,
    /// Play a beep when the recording begins
    pub beep: Option<bool>,
    /// DTMF input to terminate recording: none, any, *, #
    pub terminate_on: Option<String>,
}

impl AriOperation for RecordBridgeOperation {
    type Request = RecordBridgeRequest;
    type Response = LiveRecordingInfo;

    const METHOD: Method = Method::Post;

    fn path(request: &Self::Request) -> String {
        format!("/bridges/{}/record", request.bridge_id)
    }

    fn query(request: &Self::Request) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("name", request.name.clone()),
            ("format", request.format.clone()),
        ];
        if let Some(max_duration) = request.max_duration_seconds {
            query.push(("maxDurationSeconds", max_duration.to_string()));
        }
        if let Some(max_silence) = request.max_silence_seconds {
            query.push(("maxSilenceSeconds", max_silence.to_string()));
        }
        if let Some(if_exists) = &request.if_exists {
            query.push(("ifExists", if_exists.clone()));
        }
        if let Some(beep) = request.beep {
            query.push(("beep", beep.to_string()));
        }
        if let Some(terminate_on) = &request.terminate_on {
            query.push(("terminateOn", terminate_on.clone()));
        }
        query
    }

    fn parse_response(body: Option<&str>) -> Result<Self::Response, ApiError> {
        decode_json(body)
    }
}
