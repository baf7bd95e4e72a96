//! Status panel helpers: loading / success / error
//!
//! Each call resolves the target container by id at call time,
//! replaces its whole content with the status block, and makes it
//! visible. Missing target is a silent no-op. Calls are idempotent and
//! freely interleavable on the same container.

use dom::{el, Display, ElementBuilder};
use serde_json::Value;

use crate::SharedDocument;

#[derive(Clone)]
pub struct Panels {
    document: SharedDocument,
}

impl Panels {
    pub fn new(document: SharedDocument) -> Self {
        Self { document }
    }

    /// Replace the container's content with an indeterminate spinner
    pub async fn show_loading(&self, target_id: &str) {
        let block = el("div")
            .class("text-center p-3")
            .child(
                el("div")
                    .class("spinner-border text-primary")
                    .attr("role", "status")
                    .child(el("span").class("visually-hidden").text("Loading...")),
            )
            .child(el("div").class("mt-2").text("Loading..."));

        self.render(target_id, block).await;
    }

    /// Replace the container's content with a success alert; an
    /// optional payload is pretty-printed inside a disclosure
    pub async fn show_success(&self, target_id: &str, message: &str, data: Option<&Value>) {
        let details = data.map(|value| {
            let pretty =
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
            disclosure("View Response Data", &pretty)
        });

        let block = el("div")
            .class("alert alert-success")
            .child(el("i").class("bi bi-check-circle"))
            .child(el("strong").text("Success!"))
            .text(&format!(" {}", message))
            .maybe_child(details);

        self.render(target_id, block).await;
    }

    /// Replace the container's content with an error alert; optional
    /// detail text nests the same way as success payloads
    pub async fn show_error(&self, target_id: &str, message: &str, details: Option<&str>) {
        let details = details.map(|text| disclosure("Error Details", text));

        let block = el("div")
            .class("alert alert-danger")
            .child(el("i").class("bi bi-exclamation-triangle"))
            .child(el("strong").text("Error!"))
            .text(&format!(" {}", message))
            .maybe_child(details);

        self.render(target_id, block).await;
    }

    async fn render(&self, target_id: &str, block: ElementBuilder) {
        let mut doc = self.document.write().await;

        let target = match doc.get_element_by_id(target_id) {
            Some(node) => node,
            None => {
                tracing::debug!("panel target '{}' not in document, skipping", target_id);
                return;
            }
        };

        let panel = block.build(&mut doc);
        if let Err(e) = doc.replace_content(target, &[panel]) {
            tracing::warn!("failed to render panel into '{}': {}", target_id, e);
            return;
        }
        if let Err(e) = doc.set_display(target, Display::Block) {
            tracing::warn!("failed to show panel container '{}': {}", target_id, e);
        }
    }
}

fn disclosure(summary: &str, body: &str) -> ElementBuilder {
    el("details")
        .class("mt-2")
        .child(el("summary").text(summary))
        .child(el("pre").class("mt-2 mb-0").text(body))
}
