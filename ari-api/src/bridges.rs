//! Resource controller for the `/bridges` ARI resource
//!
//! Every method is a direct, synchronous delegation to one ARI endpoint with
//! the bridge id as the first argument. No validation, no retries, no local
//! state; failures from the transport layer propagate unchanged.

use crate::client::AriClient;
use crate::error::Result;
use crate::models::{BridgeInfo, LiveRecordingInfo, PlaybackInfo};
use crate::operations::bridges::{
    AddChannelOperation, AddChannelRequest, CreateBridgeOperation, CreateBridgeRequest,
    DestroyBridgeOperation, DestroyBridgeRequest, GetBridgeOperation, GetBridgeRequest,
    ListBridgesOperation, ListBridgesRequest, PlayMediaOperation, PlayMediaRequest,
    PlayMediaWithIdOperation, PlayMediaWithIdRequest, RecordBridgeOperation, RecordBridgeRequest,
    RemoveChannelOperation, RemoveChannelRequest, StartMusicOnHoldOperation,
    StartMusicOnHoldRequest, StopMusicOnHoldOperation, StopMusicOnHoldRequest,
};

/// Optional arguments for creating a bridge
#[derive(Debug, Clone, Default)]
pub struct CreateBridgeParams {
    /// Comma separated bridge types: mixing, holding, dtmf_events, proxy_media
    pub bridge_type: Option<String>,
    /// Unique id to assign to the bridge
    pub bridge_id: Option<String>,
    /// Friendly name to give the bridge
    pub name: Option<String>,
}

/// Optional arguments for playing media
///
/// Unset fields are omitted from the request; Asterisk applies its own
/// defaults (3000ms skip, channel language, generated playback id).
#[derive(Debug, Clone, Default)]
pub struct PlayParams {
    /// For sounds, selects language for sound
    pub lang: Option<String>,
    /// Number of milliseconds to skip before playing
    pub offset_ms: Option<u32>,
    /// Number of milliseconds to skip for forward/reverse operations
    pub skip_ms: Option<u32>,
    /// Playback id to assign
    pub playback_id: Option<String>,
}

/// Optional arguments for recording
#[derive(Debug, Clone, Default)]
pub struct RecordParams {
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

/// Controller for bridge operations
///
/// Obtained from [`AriClient::bridges`]; borrows the client, so it is
/// constructed per call site and carries no state of its own.
pub struct BridgesController<'a> {
    client: &'a AriClient,
}

impl<'a> BridgesController<'a> {
    pub(crate) fn new(client: &'a AriClient) -> Self {
        Self { client }
    }

    /// List all active bridges
    pub fn list(&self) -> Result<Vec<BridgeInfo>> {
        self.client
            .execute::<ListBridgesOperation>(&ListBridgesRequest)
    }

    /// Get the details of a bridge
    pub fn get(&self, bridge_id: &str) -> Result<BridgeInfo> {
        self.client.execute::<GetBridgeOperation>(&GetBridgeRequest {
            bridge_id: bridge_id.to_string(),
        })
    }

    /// Create a new bridge
    pub fn create(&self, params: &CreateBridgeParams) -> Result<BridgeInfo> {
        self.client
            .execute::<CreateBridgeOperation>(&CreateBridgeRequest {
                bridge_type: params.bridge_type.clone(),
                bridge_id: params.bridge_id.clone(),
                name: params.name.clone(),
            })
    }

    /// Shut down a bridge
    ///
    /// Channels in the bridge are removed and resume whatever they were
    /// doing beforehand.
    pub fn destroy(&self, bridge_id: &str) -> Result<()> {
        self.client
            .execute::<DestroyBridgeOperation>(&DestroyBridgeRequest {
                bridge_id: bridge_id.to_string(),
            })
            .map(|_| ())
    }

    /// Add a channel to a bridge
    ///
    /// `channel` allows comma separated channel ids.
    pub fn add_channel(&self, bridge_id: &str, channel: &str, role: Option<&str>) -> Result<()> {
        self.client
            .execute::<AddChannelOperation>(&AddChannelRequest {
                bridge_id: bridge_id.to_string(),
                channel: channel.to_string(),
                role: role.map(str::to_string),
            })
            .map(|_| ())
    }

    /// Remove a channel from a bridge
    ///
    /// `channel` allows comma separated channel ids.
    pub fn remove_channel(&self, bridge_id: &str, channel: &str) -> Result<()> {
        self.client
            .execute::<RemoveChannelOperation>(&RemoveChannelRequest {
                bridge_id: bridge_id.to_string(),
                channel: channel.to_string(),
            })
            .map(|_| ())
    }

    /// Play music on hold to a bridge, or change the MOH class that is playing
    pub fn start_music_on_hold(&self, bridge_id: &str, moh_class: Option<&str>) -> Result<()> {
        self.client
            .execute::<StartMusicOnHoldOperation>(&StartMusicOnHoldRequest {
                bridge_id: bridge_id.to_string(),
                moh_class: moh_class.map(str::to_string),
            })
            .map(|_| ())
    }

    /// Stop playing music on hold to a bridge
    pub fn stop_music_on_hold(&self, bridge_id: &str) -> Result<()> {
        self.client
            .execute::<StopMusicOnHoldOperation>(&StopMusicOnHoldRequest {
                bridge_id: bridge_id.to_string(),
            })
            .map(|_| ())
    }

    /// Start playback of media on a bridge
    pub fn play_media(
        &self,
        bridge_id: &str,
        media: &str,
        params: &PlayParams,
    ) -> Result<PlaybackInfo> {
        self.client.execute::<PlayMediaOperation>(&PlayMediaRequest {
            bridge_id: bridge_id.to_string(),
            media: media.to_string(),
            lang: params.lang.clone(),
            offset_ms: params.offset_ms,
            skip_ms: params.skip_ms,
            playback_id: params.playback_id.clone(),
        })
    }

    /// Start playback of media on a bridge under a caller-chosen playback id
    ///
    /// The `playback_id` in `params` is ignored here; the explicit argument
    /// goes in the URL path instead.
    pub fn play_media_with_id(
        &self,
        bridge_id: &str,
        playback_id: &str,
        media: &str,
        params: &PlayParams,
    ) -> Result<PlaybackInfo> {
        self.client
            .execute::<PlayMediaWithIdOperation>(&PlayMediaWithIdRequest {
                bridge_id: bridge_id.to_string(),
                playback_id: playback_id.to_string(),
                media: media.to_string(),
                lang: params.lang.clone(),
                offset_ms: params.offset_ms,
                skip_ms: params.skip_ms,
            })
    }

    /// Start a recording of the mixed audio from all channels in a bridge
    pub fn record(
        &self,
        bridge_id: &str,
        name: &str,
        format: &str,
        params: &RecordParams,
    ) -> Result<LiveRecordingInfo> {
        self.client
            .execute::<RecordBridgeOperation>(&RecordBridgeRequest {
                bridge_id: bridge_id.to_string(),
                name: name.to_string(),
                format: format.to_string(),
                max_duration_seconds: params.max_duration_seconds,
                max_silence_seconds: params.max_silence_seconds,
                if_exists: params.if_exists.clone(),
                beep: params.beep,
                terminate_on: params.terminate_on.clone(),
            })
    }
}
