//! Page enhancement engine
//!
//! The client-side glue of a server-rendered template, rebuilt as a
//! library: one-shot page setup (tooltips, active-nav highlighting,
//! smooth fragment scrolling) plus the reusable helpers page code
//! calls afterwards — status panels, transient notifications, a
//! never-throwing API call wrapper, clipboard copy with a legacy
//! fallback, timestamp formatting, and debounce.
//!
//! The document is the `dom` crate's owned model; everything the page
//! platform would provide (tooltip widget, scrolling, clipboard, HTTP)
//! enters through port traits, so the behavior is testable end to end
//! without a browser.

pub mod api;
pub mod clipboard;
pub mod config;
pub mod debounce;
pub mod endpoints;
pub mod error;
pub mod events;
pub mod format;
pub mod notify;
pub mod panels;
pub mod ports;
pub mod session;
pub mod setup;

use std::sync::Arc;
use tokio::sync::RwLock;

/// The document shared between the enhancer, its helpers, and their
/// timer tasks
pub type SharedDocument = Arc<RwLock<dom::Document>>;

pub use api::{ApiClient, ApiResponse, CallOptions, Method};
pub use clipboard::Clipboard;
pub use config::EnhancerConfig;
pub use debounce::{debounce, Debouncer};
pub use endpoints::ApiService;
pub use error::{EnhanceError, Result};
pub use events::{EventBus, PageEvent};
pub use format::{format_timestamp, TimestampValue};
pub use notify::{Notifier, NotifyKind};
pub use panels::Panels;
pub use ports::{ClipboardBackend, ScrollAlignment, ScrollBehavior, Scroller, TooltipEngine};
pub use session::{ClickOutcome, PageEnhancer};
