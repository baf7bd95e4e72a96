//! Capability ports
//!
//! The enhancer never talks to a real browser. Everything the page
//! would supply — the tooltip widget constructor, animated scrolling,
//! the platform clipboard — is a trait implemented by the embedder.
//! Tests swap in recording doubles; production wires the real thing.

use async_trait::async_trait;
use dom::NodeId;

use crate::error::Result;

/// How the scroll is animated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Where the target lands in the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAlignment {
    Start,
    Center,
    End,
}

/// External tooltip widget constructor: given an element, build and
/// attach a tooltip instance to it
pub trait TooltipEngine: Send + Sync {
    fn attach(&self, node: NodeId) -> Result<()>;
}

/// Viewport scrolling capability
pub trait Scroller: Send + Sync {
    fn scroll_into_view(&self, node: NodeId, behavior: ScrollBehavior, block: ScrollAlignment);
}

/// Platform clipboard capability
///
/// `write_text` is the primary path. When it is unavailable or fails,
/// the copy helper falls back to the legacy flow: an off-screen
/// textarea is selected and `exec_copy_command` is asked to copy the
/// current selection. The bool is whatever the platform reports; a
/// backend that cannot observe the outcome should return `true`.
#[async_trait]
pub trait ClipboardBackend: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<()>;

    async fn exec_copy_command(&self, selected_text: &str) -> bool;
}

/// Tooltip engine that only records the attachment in the log
#[derive(Debug, Default)]
pub struct NoopTooltips;

impl TooltipEngine for NoopTooltips {
    fn attach(&self, node: NodeId) -> Result<()> {
        tracing::debug!("tooltip attached to node {}", node);
        Ok(())
    }
}

/// Scroller that only records the scroll in the log
#[derive(Debug, Default)]
pub struct NoopScroller;

impl Scroller for NoopScroller {
    fn scroll_into_view(&self, node: NodeId, behavior: ScrollBehavior, block: ScrollAlignment) {
        tracing::debug!(
            "scroll node {} into view ({:?}, {:?})",
            node,
            behavior,
            block
        );
    }
}
