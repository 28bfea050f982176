//! Operations for the `/recordings/live` resource

pub mod cancel;
pub mod pause;
pub mod stop;

pub use cancel::{CancelRecordingOperation, CancelRecordingRequest};
pub use pause::{
    PauseRecordingOperation, PauseRecordingRequest, UnpauseRecordingOperation,
    UnpauseRecordingRequest,
};
pub use stop::{StopRecordingOperation, StopRecordingRequest};
