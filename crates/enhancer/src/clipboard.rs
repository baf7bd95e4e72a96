//! Clipboard copy with legacy fallback
//!
//! Primary path: the platform clipboard write. When that fails, the
//! legacy flow synthesizes an off-screen textarea holding the text,
//! selects it, asks the platform to run the copy command, and removes
//! the textarea again. Removal happens on every path; the command's
//! reported outcome is what the helper returns.

use dom::el;

use crate::ports::ClipboardBackend;
use crate::SharedDocument;
use std::sync::Arc;

#[derive(Clone)]
pub struct Clipboard {
    document: SharedDocument,
    backend: Arc<dyn ClipboardBackend>,
}

impl Clipboard {
    pub fn new(document: SharedDocument, backend: Arc<dyn ClipboardBackend>) -> Self {
        Self { document, backend }
    }

    /// Copy text to the clipboard, `true` on (reported) success
    pub async fn copy(&self, text: &str) -> bool {
        match self.backend.write_text(text).await {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!("primary clipboard path failed, using fallback: {}", e);
                self.copy_fallback(text).await
            }
        }
    }

    async fn copy_fallback(&self, text: &str) -> bool {
        let textarea = {
            let mut doc = self.document.write().await;
            let textarea = el("textarea")
                .attr("style", "position: fixed; left: -9999px;")
                .text(text)
                .build(&mut doc);
            if let Err(e) = doc.append_to_body(textarea) {
                tracing::warn!("failed to insert fallback textarea: {}", e);
                return false;
            }
            textarea
        };

        // "Select" the textarea content: what the copy command acts on
        let selected = {
            let doc = self.document.read().await;
            doc.text_content(textarea).unwrap_or_default()
        };

        let copied = self.backend.exec_copy_command(&selected).await;

        // The textarea comes out again no matter what the command said
        let mut doc = self.document.write().await;
        let _ = doc.detach(textarea);

        copied
    }
}
