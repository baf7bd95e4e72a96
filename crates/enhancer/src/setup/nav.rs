//! Navigation highlighting
//!
//! Marks the nav link whose href exactly equals the current page path.
//! Exact string equality is the whole rule: relative hrefs and
//! fragments simply never match an absolute path.

use dom::{Document, NodeId};

use crate::error::Result;

/// Add the active class to matching nav links; returns the nodes that
/// were activated
pub fn highlight_active(
    doc: &mut Document,
    container_class: &str,
    link_class: &str,
    active_class: &str,
    current_path: &str,
) -> Result<Vec<NodeId>> {
    let mut activated = Vec::new();

    for link in doc.find_by_class(link_class) {
        if !has_ancestor_with_class(doc, link, container_class) {
            continue;
        }
        if doc.attr(link, "href").as_deref() == Some(current_path) {
            doc.add_class(link, active_class)?;
            activated.push(link);
        }
    }

    Ok(activated)
}

fn has_ancestor_with_class(doc: &Document, node: NodeId, class: &str) -> bool {
    let mut current = doc.arena().get(node).ok().and_then(|n| n.parent_id);
    while let Some(id) = current {
        match doc.arena().get(id) {
            Ok(n) if n.has_class(class) => return true,
            Ok(n) => current = n.parent_id,
            Err(_) => return false,
        }
    }
    false
}
