//! Watch a bridge and react to its lifecycle.
//!
//! Expects a reachable Asterisk with ARI enabled:
//!
//! ```sh
//! ARI_URL=http://pbx:8088/ari ARI_USER=asterisk ARI_PASS=secret \
//!     cargo run --example bridge_monitor -- conference-1
//! ```

use std::env;

use ari_sdk::{AriConfig, AriSession, PlayParams, SdkError};

fn main() -> Result<(), SdkError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let base_url = env::var("ARI_URL").unwrap_or_else(|_| "http://127.0.0.1:8088/ari".into());
    let username = env::var("ARI_USER").unwrap_or_else(|_| "asterisk".into());
    let password = env::var("ARI_PASS").unwrap_or_else(|_| "asterisk".into());
    let bridge_id = env::args().nth(1).unwrap_or_else(|| "conference-1".into());

    let session = AriSession::connect(AriConfig::new(&base_url, &username, &password));

    let bridge = session.bridge(&bridge_id)?;
    println!(
        "bridge {} ({}, {} channels)",
        bridge.id(),
        bridge.bridge_type(),
        bridge.channels().len()
    );

    let _created = bridge.on_bridge_merged(|event| {
        println!("merged: {}", event.payload());
    })?;
    let _destroyed = bridge.once_bridge_destroyed(|event| {
        println!("destroyed: {}", event.payload());
    })?;

    let playback = bridge.play_media("sound:hello-world", &PlayParams::default())?;
    println!("playing {} as {}", playback.media_uri(), playback.id());

    // A real deployment would read the ARI WebSocket here and feed each
    // decoded message into session.publish_event().
    Ok(())
}
