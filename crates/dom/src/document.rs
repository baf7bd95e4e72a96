//! Document facade
//!
//! Owns the arena plus the skeleton every server-rendered page has
//! (`#document` -> `html` -> `body`) and exposes the element-level
//! operations page scripts actually perform: id lookup, class-list
//! edits, display toggling, content replacement, body appends.

use crate::arena::DomArena;
use crate::error::{DomError, Result};
use crate::types::{Display, DomNode, NodeId};

#[derive(Debug)]
pub struct Document {
    arena: DomArena,
    root_id: NodeId,
    html_id: NodeId,
    body_id: NodeId,
}

impl Document {
    /// Create an empty document with the standard skeleton
    pub fn new() -> Self {
        let mut arena = DomArena::new();
        let root_id = arena.add_node(DomNode::new_document(0));
        // set_root on a node just added cannot fail
        arena.set_root(root_id).expect("fresh root");

        let html_id = arena.create_element("html");
        arena.append_child(root_id, html_id).expect("fresh html");
        let body_id = arena.create_element("body");
        arena.append_child(html_id, body_id).expect("fresh body");

        Self {
            arena,
            root_id,
            html_id,
            body_id,
        }
    }

    pub fn arena(&self) -> &DomArena {
        &self.arena
    }

    pub fn arena_mut(&mut self) -> &mut DomArena {
        &mut self.arena
    }

    pub fn root(&self) -> NodeId {
        self.root_id
    }

    pub fn html(&self) -> NodeId {
        self.html_id
    }

    pub fn body(&self) -> NodeId {
        self.body_id
    }

    /// Look up an attached element by its `id` attribute
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.arena.get_element_by_id(id)
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.arena.create_element(tag)
    }

    pub fn create_text(&mut self, value: &str) -> NodeId {
        self.arena.create_text(value)
    }

    pub fn append_to_body(&mut self, node_id: NodeId) -> Result<()> {
        self.arena.append_child(self.body_id, node_id)
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.arena.append_child(parent, child)
    }

    /// Detach a node; `true` when this call performed the removal
    pub fn detach(&mut self, node_id: NodeId) -> Result<bool> {
        self.arena.detach(node_id)
    }

    pub fn is_attached(&self, node_id: NodeId) -> bool {
        self.arena.is_attached(node_id)
    }

    /// Replace all children of `parent` with `children`
    pub fn replace_content(&mut self, parent: NodeId, children: &[NodeId]) -> Result<()> {
        self.arena.replace_children(parent, children)
    }

    pub fn set_attr(&mut self, node_id: NodeId, name: &str, value: &str) -> Result<()> {
        self.arena.set_attr(node_id, name, value)
    }

    pub fn attr(&self, node_id: NodeId, name: &str) -> Option<String> {
        self.arena
            .get(node_id)
            .ok()
            .and_then(|n| n.attr(name).map(String::from))
    }

    pub fn set_display(&mut self, node_id: NodeId, display: Display) -> Result<()> {
        self.arena.set_display(node_id, display)
    }

    /// Add a class to an element's class attribute (no duplicates)
    pub fn add_class(&mut self, node_id: NodeId, class: &str) -> Result<()> {
        let node = self.arena.get(node_id)?;
        if !node.is_element() {
            return Err(DomError::NotAnElement(node_id));
        }
        if node.has_class(class) {
            return Ok(());
        }
        let merged = match node.attr("class") {
            Some(existing) if !existing.is_empty() => format!("{} {}", existing, class),
            _ => class.to_string(),
        };
        self.arena.set_attr(node_id, "class", &merged)
    }

    /// Remove a class from an element's class attribute
    pub fn remove_class(&mut self, node_id: NodeId, class: &str) -> Result<()> {
        let node = self.arena.get(node_id)?;
        if !node.is_element() {
            return Err(DomError::NotAnElement(node_id));
        }
        let remaining: Vec<&str> = node.classes().filter(|c| *c != class).collect();
        let joined = remaining.join(" ");
        self.arena.set_attr(node_id, "class", &joined)
    }

    pub fn has_class(&self, node_id: NodeId, class: &str) -> bool {
        self.arena
            .get(node_id)
            .map(|n| n.has_class(class))
            .unwrap_or(false)
    }

    pub fn find_by_class(&self, class: &str) -> Vec<NodeId> {
        self.arena.find_by_class(class)
    }

    pub fn find_by_attr(&self, attr: &str, value: &str) -> Vec<NodeId> {
        self.arena.find_by_attr(attr, value)
    }

    pub fn find_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.arena.find_by_tag(tag)
    }

    pub fn text_content(&self, node_id: NodeId) -> Result<String> {
        self.arena.text_content(node_id)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton() {
        let doc = Document::new();
        assert!(doc.is_attached(doc.body()));
        assert!(doc.is_attached(doc.html()));
    }

    #[test]
    fn test_class_ops() {
        let mut doc = Document::new();
        let link = doc.create_element("a");
        doc.set_attr(link, "class", "nav-link").unwrap();
        doc.append_to_body(link).unwrap();

        doc.add_class(link, "active").unwrap();
        assert!(doc.has_class(link, "active"));

        // Adding twice keeps a single entry
        doc.add_class(link, "active").unwrap();
        assert_eq!(doc.attr(link, "class").unwrap(), "nav-link active");

        doc.remove_class(link, "active").unwrap();
        assert!(!doc.has_class(link, "active"));
        assert!(doc.has_class(link, "nav-link"));
    }

    #[test]
    fn test_class_ops_reject_text_nodes() {
        let mut doc = Document::new();
        let text = doc.create_text("hi");
        assert!(doc.add_class(text, "x").is_err());
    }
}
