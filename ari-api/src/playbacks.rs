//! Resource controller for the `/playbacks` ARI resource

use crate::client::AriClient;
use crate::error::Result;
use crate::models::PlaybackInfo;
use crate::operations::playbacks::{
    ControlPlaybackOperation, ControlPlaybackRequest, GetPlaybackOperation, GetPlaybackRequest,
    PlaybackControl, StopPlaybackOperation, StopPlaybackRequest,
};

/// Controller for playback operations
pub struct PlaybacksController<'a> {
    client: &'a AriClient,
}

impl<'a> PlaybacksController<'a> {
    pub(crate) fn new(client: &'a AriClient) -> Self {
        Self { client }
    }

    /// Get the details of a playback
    pub fn get(&self, playback_id: &str) -> Result<PlaybackInfo> {
        self.client
            .execute::<GetPlaybackOperation>(&GetPlaybackRequest {
                playback_id: playback_id.to_string(),
            })
    }

    /// Stop a playback
    pub fn stop(&self, playback_id: &str) -> Result<()> {
        self.client
            .execute::<StopPlaybackOperation>(&StopPlaybackRequest {
                playback_id: playback_id.to_string(),
            })
            .map(|_| ())
    }

    /// Send a control operation to a playback
    pub fn control(&self, playback_id: &str, operation: PlaybackControl) -> Result<()> {
        self.client
            .execute::<ControlPlaybackOperation>(&ControlPlaybackRequest {
                playback_id: playback_id.to_string(),
                operation: operation.as_str().to_string(),
            })
            .map(|_| ())
    }
}
