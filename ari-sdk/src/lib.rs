//! # ari-sdk - Sync-first SDK for the Asterisk REST Interface
//!
//! Resource bindings over ARI with event subscriptions:
//!
//! ```rust,no_run
//! use ari_sdk::{AriConfig, AriSession, PlayParams};
//!
//! fn main() -> Result<(), ari_sdk::SdkError> {
//!     let config = AriConfig::new("http://pbx:8088/ari", "asterisk", "secret");
//!     let session = AriSession::connect(config);
//!
//!     let bridge = session.bridge("conference-1")?;
//!     println!("{} channels in {}", bridge.channels().len(), bridge.name());
//!
//!     // Register against the shared event bus, scoped to this bridge
//!     let _sub = bridge.once_bridge_destroyed(|event| {
//!         println!("destroyed: {:?}", event.payload());
//!     })?;
//!
//!     // Mutators delegate straight to the ARI endpoints
//!     let playback = bridge.play_media("sound:hello-world", &PlayParams::default())?;
//!     playback.stop()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Snapshot semantics
//!
//! A resource binding holds the server state decoded at fetch time. Mutators
//! do not refresh it; observe lifecycle changes through event registrations
//! or re-fetch through the session. In particular, `Bridge::channels()` does
//! not change after `add_channel`/`remove_channel`.
//!
//! ## Architecture
//!
//! ```text
//! ari-sdk (resource bindings: Bridge, Playback, LiveRecording)
//!     |
//! ari-api (typed operations and resource controllers)   ari-events (event bus)
//!     |
//! rest-client (synchronous HTTP, status -> error mapping)
//! ```
//!
//! The WebSocket event stream is not part of this SDK; feed decoded events
//! into [`AriSession::publish_event`] from whatever transport you run.

// Main exports
pub use error::SdkError;
pub use resources::{Bridge, LiveRecording, Playback};
pub use session::AriSession;

// Re-export commonly used types from the lower layers
pub use ari_api::{
    ApiError, AriClient, AriConfig, BridgeInfo, CreateBridgeParams, LiveRecordingInfo,
    PlayParams, PlaybackControl, PlaybackInfo, RecordParams,
};
pub use ari_events::{AriEvent, EventBus, EventError, EventKind, Subscription};

// Internal modules
mod error;
mod resources;
mod session;
