//! Wire models decoded from ARI JSON responses
//!
//! These are snapshots of server state at the time the response was decoded;
//! nothing keeps them in sync with Asterisk afterwards. Callers re-fetch or
//! watch events for freshness.

use serde::{Deserialize, Serialize};

/// A bridge as reported by Asterisk
///
/// The merging of media from one or more channels. Everyone on the bridge
/// hears the same audio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeInfo {
    /// Unique identifier for this bridge
    pub id: String,
    /// Friendly name
    #[serde(default)]
    pub name: String,
    /// Name of the current bridging technology
    pub technology: String,
    /// Type of bridge technology
    pub bridge_type: String,
    /// Bridging class
    pub bridge_class: String,
    /// Entity that created the bridge
    #[serde(default)]
    pub creator: String,
    /// Ids of channels participating in this bridge
    #[serde(default)]
    pub channels: Vec<String>,
}

/// An in-progress media playback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackInfo {
    /// Unique identifier for this playback
    pub id: String,
    /// URI of the media being played
    pub media_uri: String,
    /// URI of the channel or bridge being played to
    #[serde(default)]
    pub target_uri: String,
    /// For sounds, the language requested for the sound
    #[serde(default)]
    pub language: Option<String>,
    /// Current state of the playback ("queued", "playing", "done", ...)
    pub state: String,
}

/// An in-progress live recording
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveRecordingInfo {
    /// Base name for the recording, also its identifier
    pub name: String,
    /// Recording format (wav, gsm, ...)
    pub format: String,
    /// Current state of the recording ("queued", "recording", "done", ...)
    pub state: String,
    /// URI of the channel or bridge being recorded
    #[serde(default)]
    pub target_uri: String,
    /// Duration in seconds, reported once the recording is done
    #[serde(default)]
    pub duration: Option<u32>,
    /// Duration of silence in seconds, if silence detection was enabled
    #[serde(default)]
    pub silence_duration: Option<u32>,
    /// Duration of talking in seconds, if silence detection was enabled
    #[serde(default)]
    pub talking_duration: Option<u32>,
    /// Cause for recording failure, if failed
    #[serde(default)]
    pub cause: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridge_info_decodes_full_record() {
        let json = r#"{
            "id": "b1",
            "name": "conference",
            "technology": "simple_bridge",
            "bridge_type": "mixing",
            "bridge_class": "stasis",
            "creator": "Stasis",
            "channels": ["c1", "c2"]
        }"#;

        let info: BridgeInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.id, "b1");
        assert_eq!(info.name, "conference");
        assert_eq!(info.technology, "simple_bridge");
        assert_eq!(info.bridge_type, "mixing");
        assert_eq!(info.bridge_class, "stasis");
        assert_eq!(info.creator, "Stasis");
        assert_eq!(info.channels, vec!["c1", "c2"]);
    }

    #[test]
    fn test_bridge_info_defaults_optional_fields() {
        let json = r#"{
            "id": "b1",
            "technology": "simple_bridge",
            "bridge_type": "mixing",
            "bridge_class": "stasis"
        }"#;

        let info: BridgeInfo = serde_json::from_str(json).unwrap();
        assert!(info.name.is_empty());
        assert!(info.creator.is_empty());
        assert!(info.channels.is_empty());
    }

    #[test]
    fn test_bridge_info_missing_id_is_an_error() {
        let json = r#"{"technology": "simple_bridge", "bridge_type": "mixing", "bridge_class": "stasis"}"#;
        assert!(serde_json::from_str::<BridgeInfo>(json).is_err());
    }

    #[test]
    fn test_playback_info_decodes() {
        let json = r#"{
            "id": "p1",
            "media_uri": "sound:hello-world",
            "target_uri": "bridge:b1",
            "language": "en",
            "state": "playing"
        }"#;

        let info: PlaybackInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.id, "p1");
        assert_eq!(info.media_uri, "sound:hello-world");
        assert_eq!(info.language.as_deref(), Some("en"));
        assert_eq!(info.state, "playing");
    }

    #[test]
    fn test_live_recording_info_decodes() {
        let json = r#"{
            "name": "voicemail-42",
            "format": "wav",
            "state": "recording",
            "target_uri": "bridge:b1"
        }"#;

        let info: LiveRecordingInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.name, "voicemail-42");
        assert_eq!(info.format, "wav");
        assert!(info.duration.is_none());
        assert!(info.cause.is_none());
    }
}
