//! High-level ARI API for Asterisk control
//!
//! This crate provides a type-safe, trait-based API for driving the Asterisk
//! REST Interface. It uses the private `rest-client` crate for the HTTP
//! communication itself.
//!
//! Every ARI endpoint is modeled as an [`AriOperation`]: a request type, a
//! response type, and the method/path/query construction for the call. The
//! [`AriClient`] executes operations; resource controllers group the
//! operations for one ARI resource behind plain methods:
//!
//! ```rust,no_run
//! use ari_api::{AriClient, AriConfig, PlayParams};
//!
//! let config = AriConfig::new("http://127.0.0.1:8088/ari", "asterisk", "secret");
//! let client = AriClient::new(config);
//!
//! let bridge = client.bridges().get("my-bridge")?;
//! client.bridges().play_media(&bridge.id, "sound:hello-world", &PlayParams::default())?;
//! # Ok::<(), ari_api::ApiError>(())
//! ```

pub mod bridges;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod operation;
pub mod operations;
pub mod playbacks;
pub mod recordings;

pub use bridges::{BridgesController, CreateBridgeParams, PlayParams, RecordParams};
pub use client::AriClient;
pub use config::AriConfig;
pub use error::{ApiError, Result};
pub use models::{BridgeInfo, LiveRecordingInfo, PlaybackInfo};
pub use operation::AriOperation;
pub use operations::playbacks::control::PlaybackControl;
pub use playbacks::PlaybacksController;
pub use recordings::RecordingsController;
