//! Play operations for the bridges resource
//!
//! Starts playback of media on a bridge. The media URI may use the sound:,
//! recording:, number:, digits:, characters:, or tone: schemes. Both
//! operations create a playback resource that can be controlled afterwards
//! (pause, rewind, fast forward, stop).

use rest_client::Method;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::PlaybackInfo;
use crate::operation::{decode_json, AriOperation};

/// Start playback of media on a bridge
pub struct PlayMediaOperation;

/// Request for starting playback
#[derive(Debug, Clone, Serialize)]
pub struct PlayMediaRequest {
    pub bridge_id: String,
    /// Media URI to play
    pub media: String,
    /// For sounds, selects language for sound
    pub lang: Option<String>,
    /// Number of milliseconds to skip before playing
    pub offset_ms: Option<u32>,
    /// Number of milliseconds to skip for forward/reverse operations
    pub skip_ms: Option<u32>,
    /// Playback id to assign
    pub playback_id: Option<String>,
}

impl AriOperation for PlayMediaOperation {
    type Request = PlayMediaRequest;
    type Response = PlaybackInfo;

    const METHOD: Method = Method::Post;

    fn path(request: &Self::Request) -> String {
        format!("/bridges/{}/play", request.bridge_id)
    }

    fn query(request: &Self::Request) -> Vec<(&'static str, String)> {
        let mut query = vec![("media", request.media.clone())];
        if let Some(lang) = &request.lang {
            query.push(("lang", lang.clone()));
        }
        if let Some(offset_ms) = request.offset_ms {
            query.push(("offsetms", offset_ms.to_string()));
        }
        if let Some(skip_ms) = request.skip_ms {
            query.push(("skipms", skip_ms.to_string()));
        }
        if let Some(playback_id) = &request.playback_id {
            query.push(("playbackId", playback_id.clone()));
        }
        query
    }

    fn parse_response(body: Option<&str>) -> Result<Self::Response, ApiError> {
        decode_json(body)
    }
}

/// Start playback of media on a bridge under a caller-chosen playback id
pub struct PlayMediaWithIdOperation;

/// Request for starting playback with an explicit playback id
#[derive(Debug, Clone, Serialize)]
pub struct PlayMediaWithIdRequest {
    pub bridge_id: String,
    /// Playback id to use; goes in the URL path
    pub playback_id: String,
    /// Media URI to play
    pub media: String,
    /// For sounds, selects language for sound
    pub lang: Option<String>,
    /// Number of milliseconds to skip before playing
    pub offset_ms: Option<u32>,
    /// Number of milliseconds to skip for forward/reverse operations
    pub skip_ms: Option<u32>,
}

impl AriOperation for PlayMediaWithIdOperation {
    type Request = PlayMediaWithIdRequest;
    type Response = PlaybackInfo;

    const METHOD: Method = Method::Post;

    fn path(request: &Self::Request) -> String {
        format!("/bridges/{}/play/{}", request.bridge_id, request.playback_id)
    }

    fn query(request: &Self::Request) -> Vec<(&'static str, String)> {
        let mut query = vec![("media", request.media.clone())];
        if let Some(lang) = &request.lang {
            query.push(("lang", lang.clone()));
        }
        if let Some(offset_ms) = request.offset_ms {
            query.push(("offsetms", offset_ms.to_string()));
        }
        if let Some(skip_ms) = request.skip_ms {
            query.push(("skipms", skip_ms.to_string()));
        }
        query
    }

    fn parse_response(body: Option<&str>) -> Result<Self::Response, ApiError> {
        decode_json(body)
    }
}
