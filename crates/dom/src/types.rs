//! Core node types for the live document model
//!
//! Design notes:
//! 1. u32 arena indices instead of pointers
//! 2. SmallVec child lists (most elements hold few children)
//! 3. Attributes as a plain HashMap; the class list lives inside the
//!    `class` attribute, whitespace-separated, like real markup

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashMap;

/// Node identifier (index into the arena)
pub type NodeId = u32;

/// Node type, the subset of the DOM specification a server-rendered
/// page actually produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    Document,
    Element,
    Text,
    Comment,
}

/// Inline display state toggled by the panel helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Display {
    Block,
    None,
}

/// A single document node
///
/// Elements carry a tag name and attributes; text and comment nodes
/// carry their value in `node_value` and have an empty tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomNode {
    pub node_id: NodeId,
    pub node_type: NodeType,

    pub tag_name: String,
    pub node_value: String,
    pub attributes: HashMap<String, String>,

    pub parent_id: Option<NodeId>,
    pub children_ids: SmallVec<[NodeId; 4]>,

    /// Inline display override. `None` means display was never touched.
    pub display: Option<Display>,

    /// Stable identity across re-renders
    pub uuid: String,
}

impl DomNode {
    pub fn new_element(node_id: NodeId, tag_name: impl Into<String>) -> Self {
        Self {
            node_id,
            node_type: NodeType::Element,
            tag_name: tag_name.into(),
            node_value: String::new(),
            attributes: HashMap::new(),
            parent_id: None,
            children_ids: SmallVec::new(),
            display: None,
            uuid: uuid::Uuid::new_v4().to_string(),
        }
    }

    pub fn new_text(node_id: NodeId, value: impl Into<String>) -> Self {
        Self {
            node_id,
            node_type: NodeType::Text,
            tag_name: String::new(),
            node_value: value.into(),
            attributes: HashMap::new(),
            parent_id: None,
            children_ids: SmallVec::new(),
            display: None,
            uuid: uuid::Uuid::new_v4().to_string(),
        }
    }

    pub fn new_document(node_id: NodeId) -> Self {
        Self {
            node_id,
            node_type: NodeType::Document,
            tag_name: "#document".to_string(),
            node_value: String::new(),
            attributes: HashMap::new(),
            parent_id: None,
            children_ids: SmallVec::new(),
            display: None,
            uuid: uuid::Uuid::new_v4().to_string(),
        }
    }

    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Get attribute value
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    /// Whitespace-separated class list from the `class` attribute
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or("").split_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_list() {
        let mut node = DomNode::new_element(0, "a");
        node.attributes
            .insert("class".to_string(), "nav-link active".to_string());

        assert!(node.has_class("nav-link"));
        assert!(node.has_class("active"));
        assert!(!node.has_class("nav"));
    }

    #[test]
    fn test_text_node_has_no_attrs() {
        let node = DomNode::new_text(1, "hello");
        assert!(node.is_text());
        assert_eq!(node.attr("class"), None);
        assert!(!node.has_class("anything"));
    }
}
