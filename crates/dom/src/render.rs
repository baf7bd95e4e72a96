//! HTML rendering of document subtrees
//!
//! Used by tests to assert what the helpers actually produced, and by
//! anything that wants to dump a container's state. Attributes are
//! emitted in sorted order so output is stable; text is escaped.

use crate::arena::DomArena;
use crate::error::Result;
use crate::types::{Display, NodeId, NodeType};

/// Elements that never carry children and render without a closing tag
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

/// Render a subtree to a compact HTML string
pub fn render_html(arena: &DomArena, node_id: NodeId) -> Result<String> {
    let mut output = String::with_capacity(256);
    render_node(arena, node_id, &mut output)?;
    Ok(output)
}

fn render_node(arena: &DomArena, node_id: NodeId, output: &mut String) -> Result<()> {
    let node = arena.get(node_id)?;

    match node.node_type {
        NodeType::Element => {
            output.push('<');
            output.push_str(&node.tag_name);

            let mut names: Vec<&str> = node.attributes.keys().map(|s| s.as_str()).collect();
            names.sort_unstable();
            for name in names {
                if let Some(value) = node.attr(name) {
                    output.push(' ');
                    output.push_str(name);
                    output.push_str("=\"");
                    output.push_str(&escape(value));
                    output.push('"');
                }
            }

            if let Some(display) = node.display {
                let css = match display {
                    Display::Block => "display: block",
                    Display::None => "display: none",
                };
                output.push_str(&format!(" style=\"{}\"", css));
            }

            output.push('>');

            if VOID_ELEMENTS.contains(&node.tag_name.as_str()) {
                return Ok(());
            }

            for &child_id in &node.children_ids {
                render_node(arena, child_id, output)?;
            }

            output.push_str("</");
            output.push_str(&node.tag_name);
            output.push('>');
        }
        NodeType::Text => {
            output.push_str(&escape(&node.node_value));
        }
        NodeType::Comment => {
            output.push_str("<!--");
            output.push_str(&node.node_value);
            output.push_str("-->");
        }
        NodeType::Document => {
            for &child_id in &node.children_ids {
                render_node(arena, child_id, output)?;
            }
        }
    }

    Ok(())
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::el;
    use crate::document::Document;

    #[test]
    fn test_render_alert() {
        let mut doc = Document::new();
        let alert = el("div")
            .class("alert alert-info")
            .child(el("strong").text("Note"))
            .text(" 1 < 2")
            .build(&mut doc);
        doc.append_to_body(alert).unwrap();

        let html = render_html(doc.arena(), alert).unwrap();
        assert_eq!(
            html,
            "<div class=\"alert alert-info\"><strong>Note</strong> 1 &lt; 2</div>"
        );
    }

    #[test]
    fn test_render_display_style() {
        let mut doc = Document::new();
        let panel = el("div").id("p").build(&mut doc);
        doc.append_to_body(panel).unwrap();
        doc.set_display(panel, Display::Block).unwrap();

        let html = render_html(doc.arena(), panel).unwrap();
        assert_eq!(html, "<div id=\"p\" style=\"display: block\"></div>");
    }

    #[test]
    fn test_void_element() {
        let mut doc = Document::new();
        let spinner = el("div").child(el("br")).build(&mut doc);
        let html = render_html(doc.arena(), spinner).unwrap();
        assert_eq!(html, "<div><br></div>");
    }
}
