//! Playback resource binding

use ari_api::{AriClient, PlaybackControl, PlaybackInfo};
use ari_events::{scoped_key, AriEvent, EventBus, EventKind, Subscription};

use crate::error::Result;

/// An in-progress media playback, bound to the shared client and event bus
///
/// Snapshot semantics as for [`Bridge`](crate::Bridge): `state()` reports
/// the state at the time the playback was started or fetched.
#[derive(Clone)]
pub struct Playback {
    client: AriClient,
    events: EventBus,
    info: PlaybackInfo,
}

impl Playback {
    /// Bind a decoded playback record to a client and event bus
    pub fn new(client: AriClient, events: EventBus, info: PlaybackInfo) -> Self {
        Self {
            client,
            events,
            info,
        }
    }

    /// Unique identifier for this playback
    pub fn id(&self) -> &str {
        &self.info.id
    }

    /// URI of the media being played
    pub fn media_uri(&self) -> &str {
        &self.info.media_uri
    }

    /// URI of the channel or bridge being played to
    pub fn target_uri(&self) -> &str {
        &self.info.target_uri
    }

    /// For sounds, the language requested for the sound
    pub fn language(&self) -> Option<&str> {
        self.info.language.as_deref()
    }

    /// State of the playback, as of the snapshot
    pub fn state(&self) -> &str {
        &self.info.state
    }

    /// The raw snapshot this binding was constructed from
    pub fn info(&self) -> &PlaybackInfo {
        &self.info
    }

    /// Fire on every PlaybackStarted event for this playback id
    pub fn on_playback_started<F>(&self, callback: F) -> Result<Subscription>
    where
        F: Fn(&AriEvent) + Send + Sync + 'static,
    {
        Ok(self
            .events
            .on(&scoped_key(EventKind::PlaybackStarted, self.id()), callback)?)
    }

    /// Fire once on the next PlaybackStarted event for this playback id
    pub fn once_playback_started<F>(&self, callback: F) -> Result<Subscription>
    where
        F: Fn(&AriEvent) + Send + Sync + 'static,
    {
        Ok(self
            .events
            .once(&scoped_key(EventKind::PlaybackStarted, self.id()), callback)?)
    }

    /// Fire on every PlaybackFinished event for this playback id
    pub fn on_playback_finished<F>(&self, callback: F) -> Result<Subscription>
    where
        F: Fn(&AriEvent) + Send + Sync + 'static,
    {
        Ok(self
            .events
            .on(&scoped_key(EventKind::PlaybackFinished, self.id()), callback)?)
    }

    /// Fire once on the next PlaybackFinished event for this playback id
    pub fn once_playback_finished<F>(&self, callback: F) -> Result<Subscription>
    where
        F: Fn(&AriEvent) + Send + Sync + 'static,
    {
        Ok(self
            .events
            .once(&scoped_key(EventKind::PlaybackFinished, self.id()), callback)?)
    }

    /// Stop this playback
    pub fn stop(&self) -> Result<()> {
        Ok(self.client.playbacks().stop(self.id())?)
    }

    /// Send a control operation to this playback
    pub fn control(&self, operation: PlaybackControl) -> Result<()> {
        Ok(self.client.playbacks().control(self.id(), operation)?)
    }
}

impl std::fmt::Debug for Playback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Playback")
            .field("id", &self.info.id)
            .field("media_uri", &self.info.media_uri)
            .field("state", &self.info.state)
            .finish_non_exhaustive()
    }
}
