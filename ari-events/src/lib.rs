//! Event bus for ARI event dispatch
//!
//! ARI reports state changes (bridge created, channel entered, playback
//! finished, ...) over a WebSocket. That transport is out of scope here;
//! this crate owns the part the resource bindings consume: a shared bus with
//! keyed callback registration and delivery.
//!
//! Events are delivered under two kinds of keys: the plain event kind name
//! (`"BridgeDestroyed"`) for observers of every bridge, and the
//! resource-scoped composite key (`"BridgeDestroyed_b1"`) that the resource
//! bindings register against.

mod bus;
mod error;
mod event;

pub use bus::{EventBus, Subscription};
pub use error::{EventError, Result};
pub use event::{routing_keys, scoped_key, AriEvent, EventKind};
