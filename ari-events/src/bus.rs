//! Shared event bus with keyed callback registration

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Weak};

use crate::error::{EventError, Result};
use crate::event::{routing_keys, AriEvent};

type Callback = Arc<dyn Fn(&AriEvent) + Send + Sync>;

struct Registration {
    id: u64,
    callback: Callback,
    once: bool,
}

#[derive(Default)]
struct BusInner {
    next_id: u64,
    handlers: HashMap<String, Vec<Registration>>,
}

/// Shared event bus
///
/// Cloning is cheap; clones share the registration table. Callbacks are
/// invoked on whatever thread calls `emit`/`publish`, outside the registry
/// lock, so a callback may register or cancel subscriptions.
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Arc<Mutex<BusInner>>,
}

impl EventBus {
    /// Create a new, empty event bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a persistent callback under `key`
    ///
    /// The callback fires on every delivery until the returned subscription
    /// is cancelled.
    pub fn on<F>(&self, key: &str, callback: F) -> Result<Subscription>
    where
        F: Fn(&AriEvent) + Send + Sync + 'static,
    {
        self.register(key, Arc::new(callback), false)
    }

    /// Register a callback that is unregistered at its first delivery
    ///
    /// Fires at most once, even if the event fires repeatedly.
    pub fn once<F>(&self, key: &str, callback: F) -> Result<Subscription>
    where
        F: Fn(&AriEvent) + Send + Sync + 'static,
    {
        self.register(key, Arc::new(callback), true)
    }

    fn register(&self, key: &str, callback: Callback, once: bool) -> Result<Subscription> {
        let mut inner = self.inner.lock().map_err(|_| EventError::LockPoisoned)?;
        let id = inner.next_id;
        inner.next_id += 1;
        inner
            .handlers
            .entry(key.to_string())
            .or_default()
            .push(Registration { id, callback, once });

        tracing::debug!(key, id, once, "registered event callback");

        Ok(Subscription {
            bus: Arc::downgrade(&self.inner),
            key: key.to_string(),
            id,
        })
    }

    /// Deliver an event to the callbacks registered under `key`
    ///
    /// Once-registrations are removed before any callback runs, so a second
    /// emit for the same key cannot reach them. Returns the number of
    /// callbacks invoked.
    pub fn emit(&self, key: &str, event: &AriEvent) -> Result<usize> {
        let to_call: Vec<Callback> = {
            let mut inner = self.inner.lock().map_err(|_| EventError::LockPoisoned)?;
            match inner.handlers.get_mut(key) {
                Some(registrations) => {
                    let callbacks = registrations
                        .iter()
                        .map(|r| Arc::clone(&r.callback))
                        .collect();
                    registrations.retain(|r| !r.once);
                    if registrations.is_empty() {
                        inner.handlers.remove(key);
                    }
                    callbacks
                }
                None => Vec::new(),
            }
        };

        for callback in &to_call {
            callback(event);
        }
        Ok(to_call.len())
    }

    /// Route an event to its kind key and resource-scoped key
    ///
    /// This is the entry point an event-stream transport feeds decoded
    /// events into. Returns the total number of callbacks invoked.
    pub fn publish(&self, event: &AriEvent) -> Result<usize> {
        let mut delivered = 0;
        for key in routing_keys(event) {
            delivered += self.emit(&key, event)?;
        }
        tracing::debug!(kind = event.kind().as_str(), delivered, "published event");
        Ok(delivered)
    }

    /// Number of live registrations under `key`
    pub fn handler_count(&self, key: &str) -> usize {
        self.inner
            .lock()
            .map(|inner| inner.handlers.get(key).map_or(0, Vec::len))
            .unwrap_or(0)
    }
}

/// Cancellable handle for a registered callback
///
/// Dropping the handle without calling [`cancel`](Subscription::cancel)
/// leaves the registration active on the bus.
pub struct Subscription {
    bus: Weak<Mutex<BusInner>>,
    key: String,
    id: u64,
}

impl Subscription {
    /// The key this subscription is registered under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Remove the registration from the bus
    ///
    /// A no-op if the bus is gone or the registration was already removed
    /// (e.g. a once-callback that has fired).
    pub fn cancel(self) {
        let Some(bus) = self.bus.upgrade() else {
            return;
        };
        let Ok(mut inner) = bus.lock() else {
            return;
        };
        if let Some(registrations) = inner.handlers.get_mut(&self.key) {
            registrations.retain(|r| r.id != self.id);
            if registrations.is_empty() {
                inner.handlers.remove(&self.key);
            }
        }
        tracing::debug!(key = %self.key, id = self.id, "cancelled event callback");
    }
}
