//! Operations for the `/bridges` resource

pub mod add_channel;
pub mod create;
pub mod destroy;
pub mod get;
pub mod list;
pub mod music_on_hold;
pub mod play;
pub mod record;
pub mod remove_channel;

pub use add_channel::{AddChannelOperation, AddChannelRequest};
pub use create::{CreateBridgeOperation, CreateBridgeRequest};
pub use destroy::{DestroyBridgeOperation, DestroyBridgeRequest};
pub use get::{GetBridgeOperation, GetBridgeRequest};
pub use list::{ListBridgesOperation, ListBridgesRequest};
pub use music_on_hold::{
    StartMusicOnHoldOperation, StartMusicOnHoldRequest, StopMusicOnHoldOperation,
    StopMusicOnHoldRequest,
};
pub use play::{
    PlayMediaOperation, PlayMediaRequest, PlayMediaWithIdOperation, PlayMediaWithIdRequest,
};
pub use record::{RecordBridgeOperation, RecordBridgeRequest};
pub use remove_channel::{RemoveChannelOperation, RemoveChannelRequest};
