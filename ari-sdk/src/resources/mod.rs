//! Resource bindings
//!
//! Each binding pairs a decoded server snapshot with the shared client and
//! event bus: getters read the snapshot, mutators delegate to the client
//! keyed by the resource's id, and event registrations go on the bus under
//! `"<EventKind>_<id>"` keys. The same shape repeats per resource type.

mod bridge;
mod live_recording;
mod playback;

pub use bridge::Bridge;
pub use live_recording::LiveRecording;
pub use playback::Playback;
