//! Tooltip activation
//!
//! Scans for elements flagged with the tooltip trigger attribute and
//! hands each to the external tooltip widget. Zero matches is a no-op.

use dom::Document;

use crate::error::Result;
use crate::ports::TooltipEngine;

/// Attach a tooltip instance to every flagged element, returning how
/// many attachments succeeded
pub fn attach_all(
    doc: &Document,
    engine: &dyn TooltipEngine,
    trigger_attr: &str,
    trigger_value: &str,
) -> Result<usize> {
    let mut attached = 0;

    for node in doc.find_by_attr(trigger_attr, trigger_value) {
        match engine.attach(node) {
            Ok(()) => attached += 1,
            // One broken trigger must not stop the rest
            Err(e) => tracing::warn!("tooltip attach failed for node {}: {}", node, e),
        }
    }

    tracing::debug!("attached {} tooltips", attached);
    Ok(attached)
}
