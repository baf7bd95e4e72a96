//! Arena-based storage for the live document
//!
//! A single Vec of nodes addressed by u32 indices, plus an id-attribute
//! index for `get_element_by_id`-style lookups. Unlike a snapshot
//! arena, this one is mutable: nodes are created detached, attached
//! with `append_child`, and removed with `detach`. Detached nodes stay
//! in the Vec as tombstones; attachment is decided by walking parent
//! links up to the root.

use crate::error::{DomError, Result};
use crate::types::{Display, DomNode, NodeId, NodeType};
use ahash::AHashMap;

#[derive(Debug, Default)]
pub struct DomArena {
    /// All nodes ever created, stored sequentially
    nodes: Vec<DomNode>,

    /// `id` attribute -> NodeId. May contain stale entries for nodes
    /// that were detached; lookups re-check attachment.
    id_index: AHashMap<String, NodeId>,

    /// Root node ID (if set)
    root_id: Option<NodeId>,
}

impl DomArena {
    pub fn new() -> Self {
        Self {
            nodes: Vec::with_capacity(256),
            id_index: AHashMap::with_capacity(64),
            root_id: None,
        }
    }

    /// Add a pre-built node, returns its ID
    pub fn add_node(&mut self, mut node: DomNode) -> NodeId {
        let node_id = self.nodes.len() as NodeId;
        node.node_id = node_id;
        if let Some(id_attr) = node.attr("id") {
            self.id_index.insert(id_attr.to_string(), node_id);
        }
        self.nodes.push(node);
        node_id
    }

    /// Create a new detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.add_node(DomNode::new_element(0, tag))
    }

    /// Create a new detached text node
    pub fn create_text(&mut self, value: &str) -> NodeId {
        self.add_node(DomNode::new_text(0, value))
    }

    /// Get node by ID (immutable)
    pub fn get(&self, node_id: NodeId) -> Result<&DomNode> {
        self.nodes
            .get(node_id as usize)
            .ok_or(DomError::NodeNotFound(node_id))
    }

    /// Get node by ID (mutable)
    pub fn get_mut(&mut self, node_id: NodeId) -> Result<&mut DomNode> {
        self.nodes
            .get_mut(node_id as usize)
            .ok_or(DomError::NodeNotFound(node_id))
    }

    /// Set root node
    pub fn set_root(&mut self, node_id: NodeId) -> Result<()> {
        self.get(node_id)?;
        self.root_id = Some(node_id);
        Ok(())
    }

    pub fn root_id(&self) -> Option<NodeId> {
        self.root_id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Attach `child` as the last child of `parent`.
    ///
    /// An already-attached child is detached from its old parent first,
    /// so a node can never appear in two child lists.
    pub fn append_child(&mut self, parent_id: NodeId, child_id: NodeId) -> Result<()> {
        self.get(parent_id)?;
        self.get(child_id)?;
        self.detach(child_id)?;

        self.get_mut(parent_id)?.children_ids.push(child_id);
        self.get_mut(child_id)?.parent_id = Some(parent_id);
        Ok(())
    }

    /// Remove a node from its parent's child list.
    ///
    /// Idempotent: returns `true` only when the node was actually
    /// detached by this call, `false` when it had no parent. This is
    /// the presence guard behind at-most-once removal.
    pub fn detach(&mut self, node_id: NodeId) -> Result<bool> {
        let parent_id = match self.get(node_id)?.parent_id {
            Some(p) => p,
            None => return Ok(false),
        };

        let parent = self.get_mut(parent_id)?;
        parent.children_ids.retain(|c| *c != node_id);
        self.get_mut(node_id)?.parent_id = None;
        Ok(true)
    }

    /// Replace the entire child list of `parent` with `new_children`.
    ///
    /// Old children are detached (they become tombstones), new ones are
    /// appended in order.
    pub fn replace_children(&mut self, parent_id: NodeId, new_children: &[NodeId]) -> Result<()> {
        let old: Vec<NodeId> = self.get(parent_id)?.children_ids.to_vec();
        for child in old {
            self.detach(child)?;
        }
        for &child in new_children {
            self.append_child(parent_id, child)?;
        }
        Ok(())
    }

    /// True iff walking parent links from `node_id` reaches the root
    pub fn is_attached(&self, node_id: NodeId) -> bool {
        let root = match self.root_id {
            Some(r) => r,
            None => return false,
        };

        let mut current = node_id;
        loop {
            if current == root {
                return true;
            }
            match self.get(current).ok().and_then(|n| n.parent_id) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// Set an attribute, keeping the id index current
    pub fn set_attr(&mut self, node_id: NodeId, name: &str, value: &str) -> Result<()> {
        let node = self.get_mut(node_id)?;
        if !node.is_element() {
            return Err(DomError::NotAnElement(node_id));
        }
        node.attributes.insert(name.to_string(), value.to_string());
        if name == "id" {
            self.id_index.insert(value.to_string(), node_id);
        }
        Ok(())
    }

    /// Set the inline display state
    pub fn set_display(&mut self, node_id: NodeId, display: Display) -> Result<()> {
        self.get_mut(node_id)?.display = Some(display);
        Ok(())
    }

    /// Look up an attached element by its `id` attribute
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        let node_id = *self.id_index.get(id)?;
        let node = self.get(node_id).ok()?;
        if node.attr("id") == Some(id) && self.is_attached(node_id) {
            Some(node_id)
        } else {
            None
        }
    }

    /// Find attached nodes matching a predicate, in document order
    pub fn find<F>(&self, predicate: F) -> Vec<NodeId>
    where
        F: Fn(&DomNode) -> bool,
    {
        let mut found = Vec::new();
        let root = match self.root_id {
            Some(r) => r,
            None => return found,
        };

        // Document order = depth-first from the root
        let _ = self.traverse_df(root, |node| {
            if predicate(node) {
                found.push(node.node_id);
            }
            Ok(())
        });
        found
    }

    /// Find all attached elements carrying a class
    pub fn find_by_class(&self, class: &str) -> Vec<NodeId> {
        self.find(|node| node.is_element() && node.has_class(class))
    }

    /// Find all attached elements with `attr` equal to `value`
    pub fn find_by_attr(&self, attr: &str, value: &str) -> Vec<NodeId> {
        self.find(|node| node.is_element() && node.attr(attr) == Some(value))
    }

    /// Find all attached elements by tag name (case-insensitive)
    pub fn find_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.find(|node| node.is_element() && node.tag_name.eq_ignore_ascii_case(tag))
    }

    /// Traverse a subtree depth-first (iterative, no recursion)
    pub fn traverse_df<F>(&self, start_id: NodeId, mut visit: F) -> Result<()>
    where
        F: FnMut(&DomNode) -> Result<()>,
    {
        let mut stack = vec![start_id];

        while let Some(node_id) = stack.pop() {
            let node = self.get(node_id)?;
            visit(node)?;

            // Push children reversed so they are visited left-to-right
            for &child_id in node.children_ids.iter().rev() {
                stack.push(child_id);
            }
        }

        Ok(())
    }

    /// Concatenated text content of a subtree
    pub fn text_content(&self, node_id: NodeId) -> Result<String> {
        let mut text = String::new();
        self.traverse_df(node_id, |node| {
            if node.node_type == NodeType::Text {
                text.push_str(&node.node_value);
            }
            Ok(())
        })?;
        Ok(text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena_with_root() -> (DomArena, NodeId) {
        let mut arena = DomArena::new();
        let root = arena.add_node(DomNode::new_document(0));
        arena.set_root(root).unwrap();
        (arena, root)
    }

    #[test]
    fn test_append_and_lookup_by_id() {
        let (mut arena, root) = arena_with_root();

        let div = arena.create_element("div");
        arena.set_attr(div, "id", "result").unwrap();
        arena.append_child(root, div).unwrap();

        assert_eq!(arena.get_element_by_id("result"), Some(div));
        assert_eq!(arena.get_element_by_id("missing"), None);
    }

    #[test]
    fn test_detach_is_idempotent() {
        let (mut arena, root) = arena_with_root();

        let div = arena.create_element("div");
        arena.append_child(root, div).unwrap();
        assert!(arena.is_attached(div));

        assert!(arena.detach(div).unwrap());
        assert!(!arena.is_attached(div));

        // Second detach reports nothing to do
        assert!(!arena.detach(div).unwrap());
    }

    #[test]
    fn test_detached_node_not_found_by_id() {
        let (mut arena, root) = arena_with_root();

        let div = arena.create_element("div");
        arena.set_attr(div, "id", "panel").unwrap();
        arena.append_child(root, div).unwrap();
        arena.detach(div).unwrap();

        assert_eq!(arena.get_element_by_id("panel"), None);
    }

    #[test]
    fn test_replace_children() {
        let (mut arena, root) = arena_with_root();

        let container = arena.create_element("div");
        arena.append_child(root, container).unwrap();

        let old_child = arena.create_element("span");
        arena.append_child(container, old_child).unwrap();

        let new_child = arena.create_element("p");
        arena.replace_children(container, &[new_child]).unwrap();

        let children = &arena.get(container).unwrap().children_ids;
        assert_eq!(children.as_slice(), &[new_child]);
        assert!(!arena.is_attached(old_child));
    }

    #[test]
    fn test_find_by_class_document_order() {
        let (mut arena, root) = arena_with_root();

        let nav = arena.create_element("ul");
        arena.set_attr(nav, "class", "navbar-nav").unwrap();
        arena.append_child(root, nav).unwrap();

        let a = arena.create_element("a");
        arena.set_attr(a, "class", "nav-link").unwrap();
        arena.append_child(nav, a).unwrap();

        let b = arena.create_element("a");
        arena.set_attr(b, "class", "nav-link").unwrap();
        arena.append_child(nav, b).unwrap();

        assert_eq!(arena.find_by_class("nav-link"), vec![a, b]);
    }

    #[test]
    fn test_text_content() {
        let (mut arena, root) = arena_with_root();

        let p = arena.create_element("p");
        arena.append_child(root, p).unwrap();
        let t1 = arena.create_text("hello ");
        let t2 = arena.create_text("world");
        arena.append_child(p, t1).unwrap();
        arena.append_child(p, t2).unwrap();

        assert_eq!(arena.text_content(p).unwrap(), "hello world");
    }
}
