//! Smooth-scroll binding
//!
//! Collects every anchor whose href is a fragment reference. The
//! fragment's target is deliberately not resolved here; resolution
//! happens at click time against the then-current document.

use dom::{Document, NodeId};

/// Anchors whose href starts with `#`, paired with the bare fragment
/// identifier (which may be empty for `href="#"`)
pub fn collect_fragment_anchors(doc: &Document) -> Vec<(NodeId, String)> {
    let mut anchors = Vec::new();

    for node in doc.find_by_tag("a") {
        if let Some(href) = doc.attr(node, "href") {
            if let Some(fragment) = href.strip_prefix('#') {
                anchors.push((node, fragment.to_string()));
            }
        }
    }

    anchors
}
