//! Fluent construction of element subtrees
//!
//! The panel and notification helpers assemble small blocks of markup;
//! this builder keeps that readable:
//!
//! ```
//! use dom::{el, Document};
//!
//! let mut doc = Document::new();
//! let alert = el("div")
//!     .class("alert alert-success")
//!     .child(el("strong").text("Success!"))
//!     .text(" User created")
//!     .build(&mut doc);
//! doc.append_to_body(alert).unwrap();
//! ```
//!
//! Built subtrees are detached; the caller decides where they go.

use crate::document::Document;
use crate::types::NodeId;

enum Piece {
    Element(ElementBuilder),
    Text(String),
}

pub struct ElementBuilder {
    tag: String,
    attributes: Vec<(String, String)>,
    classes: Vec<String>,
    children: Vec<Piece>,
}

/// Start building an element
pub fn el(tag: &str) -> ElementBuilder {
    ElementBuilder {
        tag: tag.to_string(),
        attributes: Vec::new(),
        classes: Vec::new(),
        children: Vec::new(),
    }
}

impl ElementBuilder {
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    /// Add one or more whitespace-separated classes
    pub fn class(mut self, classes: &str) -> Self {
        for c in classes.split_whitespace() {
            self.classes.push(c.to_string());
        }
        self
    }

    /// Append a text child
    pub fn text(mut self, value: &str) -> Self {
        self.children.push(Piece::Text(value.to_string()));
        self
    }

    /// Append an element child
    pub fn child(mut self, child: ElementBuilder) -> Self {
        self.children.push(Piece::Element(child));
        self
    }

    /// Append an element child only when present
    pub fn maybe_child(self, child: Option<ElementBuilder>) -> Self {
        match child {
            Some(c) => self.child(c),
            None => self,
        }
    }

    /// Materialize the subtree into the document, detached
    pub fn build(self, doc: &mut Document) -> NodeId {
        let node_id = doc.create_element(&self.tag);

        if !self.classes.is_empty() {
            let class_attr = self.classes.join(" ");
            // node was just created as an element, set_attr cannot fail
            let _ = doc.set_attr(node_id, "class", &class_attr);
        }
        for (name, value) in &self.attributes {
            let _ = doc.set_attr(node_id, name, value);
        }

        for piece in self.children {
            let child_id = match piece {
                Piece::Element(builder) => builder.build(doc),
                Piece::Text(value) => doc.create_text(&value),
            };
            let _ = doc.append_child(node_id, child_id);
        }

        node_id
    }
}
