//! Page enhancer session
//!
//! Owns the shared document, the capability ports, and the fragment
//! anchor registry. `initialize` runs the three setup actions exactly
//! once; afterwards the helpers (panels, notifications, clipboard) are
//! handed out as lightweight clones over the same shared document.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use dom::{Document, NodeId};
use tokio::sync::RwLock;

use crate::api::ApiClient;
use crate::clipboard::Clipboard;
use crate::config::EnhancerConfig;
use crate::endpoints::ApiService;
use crate::events::{EventBus, PageEvent};
use crate::notify::{Notifier, NotifyKind};
use crate::panels::Panels;
use crate::ports::{
    ClipboardBackend, NoopScroller, NoopTooltips, ScrollAlignment, ScrollBehavior, Scroller,
    TooltipEngine,
};
use crate::setup::{nav, scroll, tooltips};
use crate::SharedDocument;

/// What a dispatched click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickOutcome {
    pub default_prevented: bool,
    pub scrolled: bool,
}

pub struct PageEnhancer {
    pub config: EnhancerConfig,
    pub event_bus: EventBus,

    document: SharedDocument,
    tooltip_engine: Arc<dyn TooltipEngine>,
    scroller: Arc<dyn Scroller>,

    /// Anchor node -> fragment identifier, filled at initialization
    fragment_anchors: DashMap<NodeId, String>,

    initialized: AtomicBool,
}

impl PageEnhancer {
    /// Enhancer over a freshly-owned document with log-only ports
    pub fn new(config: EnhancerConfig, document: Document) -> Self {
        Self::with_ports(
            config,
            Arc::new(RwLock::new(document)),
            Arc::new(NoopTooltips),
            Arc::new(NoopScroller),
        )
    }

    pub fn with_ports(
        config: EnhancerConfig,
        document: SharedDocument,
        tooltip_engine: Arc<dyn TooltipEngine>,
        scroller: Arc<dyn Scroller>,
    ) -> Self {
        Self {
            config,
            event_bus: EventBus::new(),
            document,
            tooltip_engine,
            scroller,
            fragment_anchors: DashMap::new(),
            initialized: AtomicBool::new(false),
        }
    }

    pub fn document(&self) -> SharedDocument {
        Arc::clone(&self.document)
    }

    /// Run the three setup actions, in order, exactly once.
    ///
    /// Each action is isolated: a failure is logged and the remaining
    /// actions still run.
    pub async fn initialize(&self) {
        if self.initialized.swap(true, Ordering::SeqCst) {
            tracing::debug!("enhancer already initialized, ignoring");
            return;
        }
        tracing::info!(
            "initializing page enhancer {} for path {}",
            self.config.id,
            self.config.current_path
        );

        {
            let doc = self.document.read().await;
            match tooltips::attach_all(
                &doc,
                self.tooltip_engine.as_ref(),
                &self.config.tooltip_attr,
                &self.config.tooltip_value,
            ) {
                Ok(count) => self.event_bus.publish(PageEvent::TooltipsAttached { count }),
                Err(e) => tracing::warn!("tooltip setup failed: {}", e),
            }
        }

        {
            let mut doc = self.document.write().await;
            match nav::highlight_active(
                &mut doc,
                &self.config.nav_container_class,
                &self.config.nav_link_class,
                &self.config.active_class,
                &self.config.current_path,
            ) {
                Ok(activated) => {
                    for node in activated {
                        self.event_bus.publish(PageEvent::NavLinkActivated { node });
                    }
                }
                Err(e) => tracing::warn!("nav highlight failed: {}", e),
            }
        }

        {
            let doc = self.document.read().await;
            for (node, fragment) in scroll::collect_fragment_anchors(&doc) {
                self.fragment_anchors.insert(node, fragment);
            }
        }

        self.event_bus.publish(PageEvent::Initialized);
    }

    /// Dispatch a click on a node.
    ///
    /// Bound fragment anchors always suppress default navigation; the
    /// smooth scroll happens only when the fragment's target exists in
    /// the document at click time.
    pub async fn click(&self, node: NodeId) -> ClickOutcome {
        let fragment = match self.fragment_anchors.get(&node) {
            Some(entry) => entry.value().clone(),
            None => {
                return ClickOutcome {
                    default_prevented: false,
                    scrolled: false,
                }
            }
        };

        let target = {
            let doc = self.document.read().await;
            doc.get_element_by_id(&fragment)
        };

        match target {
            Some(target) => {
                self.scroller
                    .scroll_into_view(target, ScrollBehavior::Smooth, ScrollAlignment::Start);
                self.event_bus.publish(PageEvent::ScrolledTo { fragment });
                ClickOutcome {
                    default_prevented: true,
                    scrolled: true,
                }
            }
            None => {
                tracing::debug!("fragment '#{}' has no target, click swallowed", fragment);
                ClickOutcome {
                    default_prevented: true,
                    scrolled: false,
                }
            }
        }
    }

    /// Panel helpers over the shared document
    pub fn panels(&self) -> Panels {
        Panels::new(self.document())
    }

    /// Notification emitter over the shared document
    pub fn notifier(&self) -> Notifier {
        Notifier::new(self.document(), self.event_bus.clone())
    }

    /// Show a notification with the configured default duration
    pub async fn notify(&self, message: &str, kind: NotifyKind) -> NodeId {
        let duration = Duration::from_millis(self.config.default_notification_ms);
        self.notifier().notify(message, kind, duration).await
    }

    /// Clipboard helper over the shared document
    pub fn clipboard(&self, backend: Arc<dyn ClipboardBackend>) -> Clipboard {
        Clipboard::new(self.document(), backend)
    }

    /// Typed client for the configured API base
    pub fn api(&self) -> ApiService {
        ApiService::new(ApiClient::new(), &self.config.api_base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom::el;
    use std::sync::Mutex;

    struct RecordingScroller {
        scrolls: Mutex<Vec<(NodeId, ScrollBehavior, ScrollAlignment)>>,
    }

    impl RecordingScroller {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                scrolls: Mutex::new(Vec::new()),
            })
        }
    }

    impl Scroller for RecordingScroller {
        fn scroll_into_view(&self, node: NodeId, behavior: ScrollBehavior, block: ScrollAlignment) {
            self.scrolls.lock().unwrap().push((node, behavior, block));
        }
    }

    /// Page with a nav bar, a tooltip trigger, fragment anchors and a
    /// scroll target
    fn template_page() -> (Document, NodeId, NodeId, NodeId) {
        let mut doc = Document::new();

        let nav = el("ul").class("navbar-nav").build(&mut doc);
        doc.append_to_body(nav).unwrap();
        let home = el("a").class("nav-link").attr("href", "/").build(&mut doc);
        let users = el("a")
            .class("nav-link")
            .attr("href", "/users")
            .build(&mut doc);
        doc.append_child(nav, home).unwrap();
        doc.append_child(nav, users).unwrap();

        let tip = el("button")
            .attr("data-bs-toggle", "tooltip")
            .build(&mut doc);
        doc.append_to_body(tip).unwrap();

        let good_anchor = el("a").attr("href", "#features").build(&mut doc);
        let dead_anchor = el("a").attr("href", "#nowhere").build(&mut doc);
        doc.append_to_body(good_anchor).unwrap();
        doc.append_to_body(dead_anchor).unwrap();

        let section = el("section").id("features").build(&mut doc);
        doc.append_to_body(section).unwrap();

        (doc, users, good_anchor, dead_anchor)
    }

    fn enhancer_on(
        doc: Document,
        scroller: Arc<RecordingScroller>,
    ) -> PageEnhancer {
        let config = EnhancerConfig {
            current_path: "/users".to_string(),
            ..EnhancerConfig::default()
        };
        PageEnhancer::with_ports(
            config,
            Arc::new(RwLock::new(doc)),
            Arc::new(NoopTooltips),
            scroller,
        )
    }

    #[tokio::test]
    async fn test_initialize_highlights_current_nav_link() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let (doc, users_link, _, _) = template_page();
        let enhancer = enhancer_on(doc, RecordingScroller::new());

        enhancer.initialize().await;

        let doc = enhancer.document();
        let doc = doc.read().await;
        assert!(doc.has_class(users_link, "active"));
        // Exactly one active link on the page
        assert_eq!(doc.find_by_class("active").len(), 1);
    }

    #[tokio::test]
    async fn test_click_on_bound_anchor_scrolls_once() {
        let (doc, _, good_anchor, _) = template_page();
        let scroller = RecordingScroller::new();
        let enhancer = enhancer_on(doc, scroller.clone());
        enhancer.initialize().await;

        let outcome = enhancer.click(good_anchor).await;

        assert_eq!(
            outcome,
            ClickOutcome {
                default_prevented: true,
                scrolled: true,
            }
        );
        let scrolls = scroller.scrolls.lock().unwrap();
        assert_eq!(scrolls.len(), 1);
        let (_, behavior, block) = scrolls[0];
        assert_eq!(behavior, ScrollBehavior::Smooth);
        assert_eq!(block, ScrollAlignment::Start);
    }

    #[tokio::test]
    async fn test_click_with_missing_target_still_prevents_default() {
        let (doc, _, _, dead_anchor) = template_page();
        let scroller = RecordingScroller::new();
        let enhancer = enhancer_on(doc, scroller.clone());
        enhancer.initialize().await;

        let outcome = enhancer.click(dead_anchor).await;

        assert_eq!(
            outcome,
            ClickOutcome {
                default_prevented: true,
                scrolled: false,
            }
        );
        assert!(scroller.scrolls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_click_on_unbound_node_is_ignored() {
        let (doc, users_link, _, _) = template_page();
        let scroller = RecordingScroller::new();
        let enhancer = enhancer_on(doc, scroller.clone());
        enhancer.initialize().await;

        let outcome = enhancer.click(users_link).await;

        assert_eq!(
            outcome,
            ClickOutcome {
                default_prevented: false,
                scrolled: false,
            }
        );
        assert!(scroller.scrolls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_initialize_runs_once() {
        let (doc, _, _, _) = template_page();
        let enhancer = enhancer_on(doc, RecordingScroller::new());
        let mut rx = enhancer.event_bus.subscribe();

        enhancer.initialize().await;
        enhancer.initialize().await;

        let mut tooltip_events = 0;
        while let Ok(event) = rx.try_recv() {
            if matches!(event, PageEvent::TooltipsAttached { .. }) {
                tooltip_events += 1;
            }
        }
        assert_eq!(tooltip_events, 1);
    }
}
