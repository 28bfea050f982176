//! Operations for the `/playbacks` resource

pub mod control;
pub mod get;
pub mod stop;

pub use control::{ControlPlaybackOperation, ControlPlaybackRequest, PlaybackControl};
pub use get::{GetPlaybackOperation, GetPlaybackRequest};
pub use stop::{StopPlaybackOperation, StopPlaybackRequest};
