//! Bridge resource binding
//!
//! The merging of media from one or more channels. Everyone on the bridge
//! hears the same audio.

use ari_api::{AriClient, BridgeInfo, PlayParams, RecordParams};
use ari_events::{scoped_key, AriEvent, EventBus, EventKind, Subscription};

use crate::error::Result;
use crate::resources::{LiveRecording, Playback};

/// A bridge, bound to the shared client and event bus
///
/// Fields are a snapshot of server state at the time the bridge was fetched
/// or created; mutators do not refresh them. `id` is fixed for the life of
/// the binding. Observe lifecycle changes through the event registrations or
/// re-fetch through the session.
#[derive(Clone)]
pub struct Bridge {
    client: AriClient,
    events: EventBus,
    info: BridgeInfo,
}

impl Bridge {
    /// Bind a decoded bridge record to a client and event bus
    pub fn new(client: AriClient, events: EventBus, info: BridgeInfo) -> Self {
        Self {
            client,
            events,
            info,
        }
    }

    /// Unique identifier for this bridge
    pub fn id(&self) -> &str {
        &self.info.id
    }

    /// Friendly name
    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// Name of the current bridging technology
    pub fn technology(&self) -> &str {
        &self.info.technology
    }

    /// Type of bridge technology
    pub fn bridge_type(&self) -> &str {
        &self.info.bridge_type
    }

    /// Bridging class
    pub fn bridge_class(&self) -> &str {
        &self.info.bridge_class
    }

    /// Entity that created the bridge
    pub fn creator(&self) -> &str {
        &self.info.creator
    }

    /// Ids of channels participating in this bridge, as of the snapshot
    ///
    /// Not updated by [`add_channel`](Bridge::add_channel) or
    /// [`remove_channel`](Bridge::remove_channel); the server owns this
    /// list.
    pub fn channels(&self) -> &[String] {
        &self.info.channels
    }

    /// The raw snapshot this binding was constructed from
    pub fn info(&self) -> &BridgeInfo {
        &self.info
    }

    fn on_event<F>(&self, kind: EventKind, callback: F) -> Result<Subscription>
    where
        F: Fn(&AriEvent) + Send + Sync + 'static,
    {
        Ok(self.events.on(&scoped_key(kind, self.id()), callback)?)
    }

    fn once_event<F>(&self, kind: EventKind, callback: F) -> Result<Subscription>
    where
        F: Fn(&AriEvent) + Send + Sync + 'static,
    {
        Ok(self.events.once(&scoped_key(kind, self.id()), callback)?)
    }

    /// Fire on every BridgeCreated event for this bridge id
    pub fn on_bridge_created<F>(&self, callback: F) -> Result<Subscription>
    where
        F: Fn(&AriEvent) + Send + Sync + 'static,
    {
        self.on_event(EventKind::BridgeCreated, callback)
    }

    /// Fire once on the next BridgeCreated event for this bridge id
    pub fn once_bridge_created<F>(&self, callback: F) -> Result<Subscription>
    where
        F: Fn(&AriEvent) + Send + Sync + 'static,
    {
        self.once_event(EventKind::BridgeCreated, callback)
    }

    /// Fire on every BridgeDestroyed event for this bridge id
    pub fn on_bridge_destroyed<F>(&self, callback: F) -> Result<Subscription>
    where
        F: Fn(&AriEvent) + Send + Sync + 'static,
    {
        self.on_event(EventKind::BridgeDestroyed, callback)
    }

    /// Fire once on the next BridgeDestroyed event for this bridge id
    pub fn once_bridge_destroyed<F>(&self, callback: F) -> Result<Subscription>
    where
        F: Fn(&AriEvent) + Send + Sync + 'static,
    {
        self.once_event(EventKind::BridgeDestroyed, callback)
    }

    /// Fire on every BridgeMerged event for this bridge id
    pub fn on_bridge_merged<F>(&self, callback: F) -> Result<Subscription>
    where
        F: Fn(&AriEvent) + Send + Sync + 'static,
    {
        self.on_event(EventKind::BridgeMerged, callback)
    }

    /// Fire once on the next BridgeMerged event for this bridge id
    pub fn once_bridge_merged<F>(&self, callback: F) -> Result<Subscription>
    where
        F: Fn(&AriEvent) + Send + Sync + 'static,
    {
        self.once_event(EventKind::BridgeMerged, callback)
    }

    /// Shut down this bridge
    ///
    /// Channels in the bridge are removed and resume whatever they were
    /// doing beforehand.
    pub fn destroy(&self) -> Result<()> {
        Ok(self.client.bridges().destroy(self.id())?)
    }

    /// Add a channel to this bridge
    ///
    /// `channel` allows comma separated channel ids.
    pub fn add_channel(&self, channel: &str, role: Option<&str>) -> Result<()> {
        Ok(self.client.bridges().add_channel(self.id(), channel, role)?)
    }

    /// Remove a channel from this bridge
    ///
    /// `channel` allows comma separated channel ids.
    pub fn remove_channel(&self, channel: &str) -> Result<()> {
        Ok(self.client.bridges().remove_channel(self.id(), channel)?)
    }

    /// Play music on hold to this bridge, or change the MOH class playing
    pub fn start_music_on_hold(&self, moh_class: Option<&str>) -> Result<()> {
        Ok(self
            .client
            .bridges()
            .start_music_on_hold(self.id(), moh_class)?)
    }

    /// Stop playing music on hold to this bridge
    ///
    /// Only stops music on hold started through the bridge MOH endpoint.
    pub fn stop_music_on_hold(&self) -> Result<()> {
        Ok(self.client.bridges().stop_music_on_hold(self.id())?)
    }

    /// Start playback of media on this bridge
    ///
    /// The media URI may use the sound:, recording:, number:, digits:,
    /// characters:, or tone: schemes. The returned [`Playback`] controls the
    /// playback (pause, rewind, fast forward, stop).
    pub fn play_media(&self, media: &str, params: &PlayParams) -> Result<Playback> {
        let info = self.client.bridges().play_media(self.id(), media, params)?;
        Ok(Playback::new(
            self.client.clone(),
            self.events.clone(),
            info,
        ))
    }

    /// Start playback of media under a caller-chosen playback id
    pub fn play_media_with_id(
        &self,
        playback_id: &str,
        media: &str,
        params: &PlayParams,
    ) -> Result<Playback> {
        let info = self
            .client
            .bridges()
            .play_media_with_id(self.id(), playback_id, media, params)?;
        Ok(Playback::new(
            self.client.clone(),
            self.events.clone(),
            info,
        ))
    }

    /// Record the mixed audio from all channels in this bridge
    pub fn record(&self, name: &str, format: &str, params: &RecordParams) -> Result<LiveRecording> {
        let info = self.client.bridges().record(self.id(), name, format, params)?;
        Ok(LiveRecording::new(
            self.client.clone(),
            self.events.clone(),
            info,
        ))
    }
}

impl std::fmt::Debug for Bridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bridge")
            .field("id", &self.info.id)
            .field("name", &self.info.name)
            .field("channels", &self.info.channels)
            .finish_non_exhaustive()
    }
}
