//! Page events
//!
//! A broadcast-based bus lets page-specific code observe what the
//! enhancer did without coupling to it. Publishing with no subscribers
//! is fine and ignored.

use dom::NodeId;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PageEvent {
    Initialized,
    TooltipsAttached { count: usize },
    NavLinkActivated { node: NodeId },
    ScrolledTo { fragment: String },
    NotificationShown { node: NodeId },
    NotificationDismissed { node: NodeId },
}

#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<PageEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(256);
        Self { tx }
    }

    /// Publish an event
    pub fn publish(&self, event: PageEvent) {
        let _ = self.tx.send(event); // Ignore error if no subscribers
    }

    /// Subscribe to events
    pub fn subscribe(&self) -> broadcast::Receiver<PageEvent> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
