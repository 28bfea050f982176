//! ARI event model and routing keys

use serde_json::Value;

use crate::error::EventError;

/// Kinds of ARI events this SDK routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A bridge was created
    BridgeCreated,
    /// A bridge was destroyed
    BridgeDestroyed,
    /// Two bridges were merged
    BridgeMerged,
    /// A channel entered a bridge
    ChannelEnteredBridge,
    /// A channel left a bridge
    ChannelLeftBridge,
    /// A playback started
    PlaybackStarted,
    /// A playback finished
    PlaybackFinished,
    /// A recording started
    RecordingStarted,
    /// A recording finished
    RecordingFinished,
    /// A recording failed
    RecordingFailed,
}

impl EventKind {
    /// The event type name as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::BridgeCreated => "BridgeCreated",
            EventKind::BridgeDestroyed => "BridgeDestroyed",
            EventKind::BridgeMerged => "BridgeMerged",
            EventKind::ChannelEnteredBridge => "ChannelEnteredBridge",
            EventKind::ChannelLeftBridge => "ChannelLeftBridge",
            EventKind::PlaybackStarted => "PlaybackStarted",
            EventKind::PlaybackFinished => "PlaybackFinished",
            EventKind::RecordingStarted => "RecordingStarted",
            EventKind::RecordingFinished => "RecordingFinished",
            EventKind::RecordingFailed => "RecordingFailed",
        }
    }
}

impl std::str::FromStr for EventKind {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BridgeCreated" => Ok(EventKind::BridgeCreated),
            "BridgeDestroyed" => Ok(EventKind::BridgeDestroyed),
            "BridgeMerged" => Ok(EventKind::BridgeMerged),
            "ChannelEnteredBridge" => Ok(EventKind::ChannelEnteredBridge),
            "ChannelLeftBridge" => Ok(EventKind::ChannelLeftBridge),
            "PlaybackStarted" => Ok(EventKind::PlaybackStarted),
            "PlaybackFinished" => Ok(EventKind::PlaybackFinished),
            "RecordingStarted" => Ok(EventKind::RecordingStarted),
            "RecordingFinished" => Ok(EventKind::RecordingFinished),
            "RecordingFailed" => Ok(EventKind::RecordingFailed),
            other => Err(EventError::UnknownEventType(other.to_string())),
        }
    }
}

/// A decoded ARI event
///
/// Carries the event kind plus the raw JSON payload as Asterisk sent it.
/// Consumers pick the fields they need out of the payload; this crate only
/// looks at the ids needed for routing.
#[derive(Debug, Clone)]
pub struct AriEvent {
    kind: EventKind,
    payload: Value,
}

impl AriEvent {
    /// Wrap an already-classified payload
    pub fn new(kind: EventKind, payload: Value) -> Self {
        Self { kind, payload }
    }

    /// Decode an event from its wire JSON, classifying by the `type` field
    pub fn from_json(payload: Value) -> Result<Self, EventError> {
        let kind = payload
            .get("type")
            .and_then(Value::as_str)
            .ok_or(EventError::MissingEventType)?
            .parse()?;
        Ok(Self { kind, payload })
    }

    /// The kind of this event
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// The raw event payload
    pub fn payload(&self) -> &Value {
        &self.payload
    }
}

/// The bus key scoped to a single resource
pub fn scoped_key(kind: EventKind, id: &str) -> String {
    format!("{}_{}", kind.as_str(), id)
}

/// The keys an event is delivered under
///
/// Every event is delivered under its plain kind name. Events that identify
/// a resource are additionally delivered under the `"<kind>_<id>"` key the
/// resource bindings register against.
pub fn routing_keys(event: &AriEvent) -> Vec<String> {
    let mut keys = vec![event.kind().as_str().to_string()];
    if let Some(id) = resource_id(event) {
        keys.push(scoped_key(event.kind(), id));
    }
    keys
}

/// The id of the resource an event is about, read from its payload
fn resource_id(event: &AriEvent) -> Option<&str> {
    let payload = event.payload();
    match event.kind() {
        EventKind::BridgeCreated
        | EventKind::BridgeDestroyed
        | EventKind::BridgeMerged
        | EventKind::ChannelEnteredBridge
        | EventKind::ChannelLeftBridge => payload.get("bridge")?.get("id")?.as_str(),
        EventKind::PlaybackStarted | EventKind::PlaybackFinished => {
            payload.get("playback")?.get("id")?.as_str()
        }
        EventKind::RecordingStarted
        | EventKind::RecordingFinished
        | EventKind::RecordingFailed => payload.get("recording")?.get("name")?.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_classifies_by_type() {
        let event = AriEvent::from_json(json!({
            "type": "BridgeDestroyed",
            "bridge": {"id": "b1"}
        }))
        .unwrap();
        assert_eq!(event.kind(), EventKind::BridgeDestroyed);
    }

    #[test]
    fn test_from_json_rejects_missing_type() {
        let err = AriEvent::from_json(json!({"bridge": {"id": "b1"}})).unwrap_err();
        assert!(matches!(err, EventError::MissingEventType));
    }

    #[test]
    fn test_from_json_rejects_unknown_type() {
        let err = AriEvent::from_json(json!({"type": "DeviceStateChanged"})).unwrap_err();
        match err {
            EventError::UnknownEventType(name) => assert_eq!(name, "DeviceStateChanged"),
            other => panic!("expected UnknownEventType, got {:?}", other),
        }
    }

    #[test]
    fn test_bridge_event_routes_to_bridge_id() {
        let event = AriEvent::new(
            EventKind::BridgeMerged,
            json!({"bridge": {"id": "b1"}, "bridge_from": {"id": "b2"}}),
        );
        assert_eq!(routing_keys(&event), vec!["BridgeMerged", "BridgeMerged_b1"]);
    }

    #[test]
    fn test_playback_event_routes_to_playback_id() {
        let event = AriEvent::new(
            EventKind::PlaybackFinished,
            json!({"playback": {"id": "p1", "state": "done"}}),
        );
        assert_eq!(
            routing_keys(&event),
            vec!["PlaybackFinished", "PlaybackFinished_p1"]
        );
    }

    #[test]
    fn test_recording_event_routes_to_recording_name() {
        let event = AriEvent::new(
            EventKind::RecordingFailed,
            json!({"recording": {"name": "meeting", "cause": "hangup"}}),
        );
        assert_eq!(
            routing_keys(&event),
            vec!["RecordingFailed", "RecordingFailed_meeting"]
        );
    }

    #[test]
    fn test_event_without_id_routes_to_kind_only() {
        let event = AriEvent::new(EventKind::BridgeCreated, json!({}));
        assert_eq!(routing_keys(&event), vec!["BridgeCreated"]);
    }

    #[test]
    fn test_scoped_key_format() {
        assert_eq!(
            scoped_key(EventKind::BridgeCreated, "b1"),
            "BridgeCreated_b1"
        );
    }
}
