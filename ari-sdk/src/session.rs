//! Session entry point wiring the ARI client and the event bus

use ari_api::{AriClient, AriConfig, CreateBridgeParams};
use ari_events::{AriEvent, EventBus};

use crate::error::Result;
use crate::resources::Bridge;

/// A connected ARI session
///
/// Owns the shared HTTP client and event bus that all resource bindings
/// reference. Cloning the session is cheap; clones share both.
///
/// The session does not run an event-stream transport. Whatever consumes
/// the ARI WebSocket decodes each message into an
/// [`AriEvent`](ari_events::AriEvent) and hands it to
/// [`publish_event`](AriSession::publish_event); registered callbacks fire
/// from there.
#[derive(Clone)]
pub struct AriSession {
    client: AriClient,
    events: EventBus,
}

impl AriSession {
    /// Create a session for the given configuration
    pub fn connect(config: AriConfig) -> Self {
        tracing::debug!(
            base_url = config.base_url(),
            app = config.app_name(),
            "creating ARI session"
        );
        Self {
            client: AriClient::new(config),
            events: EventBus::new(),
        }
    }

    /// The shared ARI client
    pub fn client(&self) -> &AriClient {
        &self.client
    }

    /// The shared event bus
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Fetch a bridge by id and bind it to this session
    pub fn bridge(&self, bridge_id: &str) -> Result<Bridge> {
        let info = self.client.bridges().get(bridge_id)?;
        Ok(Bridge::new(self.client.clone(), self.events.clone(), info))
    }

    /// List all active bridges, bound to this session
    pub fn bridges(&self) -> Result<Vec<Bridge>> {
        let infos = self.client.bridges().list()?;
        Ok(infos
            .into_iter()
            .map(|info| Bridge::new(self.client.clone(), self.events.clone(), info))
            .collect())
    }

    /// Create a new bridge and bind it to this session
    pub fn create_bridge(&self, params: &CreateBridgeParams) -> Result<Bridge> {
        let info = self.client.bridges().create(params)?;
        Ok(Bridge::new(self.client.clone(), self.events.clone(), info))
    }

    /// Feed a decoded event into the bus
    ///
    /// Returns the number of callbacks that fired.
    pub fn publish_event(&self, event: &AriEvent) -> Result<usize> {
        Ok(self.events.publish(event)?)
    }
}
