//! Transient notifications
//!
//! A notification is a dismissible fixed-position alert appended to
//! the body. Removal can come from the auto-dismiss timer or from the
//! manual dismiss control; both funnel through `dismiss`, which only
//! acts when the node is still attached, so the two paths can race and
//! exactly one wins.

use std::time::Duration;

use dom::{el, NodeId};

use crate::events::{EventBus, PageEvent};
use crate::SharedDocument;

/// Notification severity, mapped onto the page's alert styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifyKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl NotifyKind {
    fn alert_class(&self) -> &'static str {
        match self {
            NotifyKind::Info => "alert-info",
            NotifyKind::Success => "alert-success",
            NotifyKind::Warning => "alert-warning",
            NotifyKind::Error => "alert-danger",
        }
    }
}

#[derive(Clone)]
pub struct Notifier {
    document: SharedDocument,
    events: EventBus,
}

impl Notifier {
    pub fn new(document: SharedDocument, events: EventBus) -> Self {
        Self { document, events }
    }

    /// Show a notification and schedule its auto-dismissal
    pub async fn notify(&self, message: &str, kind: NotifyKind, duration: Duration) -> NodeId {
        let node = {
            let mut doc = self.document.write().await;
            let node = el("div")
                .class(&format!(
                    "alert {} alert-dismissible fade show position-fixed",
                    kind.alert_class()
                ))
                .attr(
                    "style",
                    "top: 20px; right: 20px; z-index: 9999; min-width: 300px;",
                )
                .text(message)
                .child(
                    el("button")
                        .attr("type", "button")
                        .class("btn-close")
                        .attr("data-bs-dismiss", "alert"),
                )
                .build(&mut doc);

            if let Err(e) = doc.append_to_body(node) {
                tracing::warn!("failed to attach notification: {}", e);
                return node;
            }
            node
        };

        self.events.publish(PageEvent::NotificationShown { node });

        let notifier = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            notifier.dismiss(node).await;
        });

        node
    }

    /// Remove a notification if it is still attached.
    ///
    /// Returns `true` only when this call performed the removal.
    pub async fn dismiss(&self, node: NodeId) -> bool {
        let removed = {
            let mut doc = self.document.write().await;
            if !doc.is_attached(node) {
                return false;
            }
            doc.detach(node).unwrap_or(false)
        };

        if removed {
            self.events.publish(PageEvent::NotificationDismissed { node });
        }
        removed
    }
}
