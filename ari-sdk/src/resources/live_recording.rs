//! Live recording resource binding

use ari_api::{AriClient, LiveRecordingInfo};
use ari_events::{scoped_key, AriEvent, EventBus, EventKind, Subscription};

use crate::error::Result;

/// An in-progress recording, bound to the shared client and event bus
///
/// Recordings are addressed by name. Snapshot semantics as for
/// [`Bridge`](crate::Bridge).
#[derive(Clone)]
pub struct LiveRecording {
    client: AriClient,
    events: EventBus,
    info: LiveRecordingInfo,
}

impl LiveRecording {
    /// Bind a decoded recording record to a client and event bus
    pub fn new(client: AriClient, events: EventBus, info: LiveRecordingInfo) -> Self {
        Self {
            client,
            events,
            info,
        }
    }

    /// Base name for the recording, also its identifier
    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// Recording format (wav, gsm, ...)
    pub fn format(&self) -> &str {
        &self.info.format
    }

    /// State of the recording, as of the snapshot
    pub fn state(&self) -> &str {
        &self.info.state
    }

    /// URI of the channel or bridge being recorded
    pub fn target_uri(&self) -> &str {
        &self.info.target_uri
    }

    /// Cause for recording failure, if failed
    pub fn cause(&self) -> Option<&str> {
        self.info.cause.as_deref()
    }

    /// The raw snapshot this binding was constructed from
    pub fn info(&self) -> &LiveRecordingInfo {
        &self.info
    }

    /// Fire on every RecordingFinished event for this recording
    pub fn on_recording_finished<F>(&self, callback: F) -> Result<Subscription>
    where
        F: Fn(&AriEvent) + Send + Sync + 'static,
    {
        Ok(self.events.on(
            &scoped_key(EventKind::RecordingFinished, self.name()),
            callback,
        )?)
    }

    /// Fire once on the next RecordingFinished event for this recording
    pub fn once_recording_finished<F>(&self, callback: F) -> Result<Subscription>
    where
        F: Fn(&AriEvent) + Send + Sync + 'static,
    {
        Ok(self.events.once(
            &scoped_key(EventKind::RecordingFinished, self.name()),
            callback,
        )?)
    }

    /// Fire on every RecordingFailed event for this recording
    pub fn on_recording_failed<F>(&self, callback: F) -> Result<Subscription>
    where
        F: Fn(&AriEvent) + Send + Sync + 'static,
    {
        Ok(self.events.on(
            &scoped_key(EventKind::RecordingFailed, self.name()),
            callback,
        )?)
    }

    /// Fire once on the next RecordingFailed event for this recording
    pub fn once_recording_failed<F>(&self, callback: F) -> Result<Subscription>
    where
        F: Fn(&AriEvent) + Send + Sync + 'static,
    {
        Ok(self.events.once(
            &scoped_key(EventKind::RecordingFailed, self.name()),
            callback,
        )?)
    }

    /// Stop this recording and store it
    pub fn stop(&self) -> Result<()> {
        Ok(self.client.recordings().stop(self.name())?)
    }

    /// Pause this recording
    pub fn pause(&self) -> Result<()> {
        Ok(self.client.recordings().pause(self.name())?)
    }

    /// Resume this recording
    pub fn unpause(&self) -> Result<()> {
        Ok(self.client.recordings().unpause(self.name())?)
    }

    /// Stop this recording and discard it
    pub fn cancel(&self) -> Result<()> {
        Ok(self.client.recordings().cancel(self.name())?)
    }
}

impl std::fmt::Debug for LiveRecording {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveRecording")
            .field("name", &self.info.name)
            .field("format", &self.info.format)
            .field("state", &self.info.state)
            .finish_non_exhaustive()
    }
}
