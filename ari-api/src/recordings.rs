//! Resource controller for the `/recordings/live` ARI resource

use crate::client::AriClient;
use crate::error::Result;
use crate::operations::recordings::{
    CancelRecordingOperation, CancelRecordingRequest, PauseRecordingOperation,
    PauseRecordingRequest, StopRecordingOperation, StopRecordingRequest,
    UnpauseRecordingOperation, UnpauseRecordingRequest,
};

/// Controller for live recording operations
///
/// Live recordings are addressed by name rather than by a generated id.
pub struct RecordingsController<'a> {
    client: &'a AriClient,
}

impl<'a> RecordingsController<'a> {
    pub(crate) fn new(client: &'a AriClient) -> Self {
        Self { client }
    }

    /// Stop a live recording and store it
    pub fn stop(&self, recording_name: &str) -> Result<()> {
        self.client
            .execute::<StopRecordingOperation>(&StopRecordingRequest {
                recording_name: recording_name.to_string(),
            })
            .map(|_| ())
    }

    /// Pause a live recording
    pub fn pause(&self, recording_name: &str) -> Result<()> {
        self.client
            .execute::<PauseRecordingOperation>(&PauseRecordingRequest {
                recording_name: recording_name.to_string(),
            })
            .map(|_| ())
    }

    /// Resume a paused live recording
    pub fn unpause(&self, recording_name: &str) -> Result<()> {
        self.client
            .execute::<UnpauseRecordingOperation>(&UnpauseRecordingRequest {
                recording_name: recording_name.to_string(),
            })
            .map(|_| ())
    }

    /// Stop a live recording and discard it
    pub fn cancel(&self, recording_name: &str) -> Result<()> {
        self.client
            .execute::<CancelRecordingOperation>(&CancelRecordingRequest {
                recording_name: recording_name.to_string(),
            })
            .map(|_| ())
    }
}
