// SPDX-License-Identifier: MIT
//! Resource injection.
//!
//! Appends script and stylesheet reference nodes to the live document so the
//! host environment loads them. Injection is strictly append-only and
//! fire-and-forget: whether the resource actually fetches or applies is the
//! host environment's business, and a document without a body silently drops
//! the request.

pub mod document;

pub use document::{DocumentPort, Element, InMemoryDocument};

/// Injects script/style resource references into a running document.
///
/// Generic over the [`DocumentPort`] so the same component drives a webview
/// document in the shell and an [`InMemoryDocument`] in tests. Nodes land in
/// call order at the end of the body's children; nothing is ever removed,
/// replaced, or deduplicated.
pub struct ResourceInjector<D> {
    document: D,
}

impl<D: DocumentPort> ResourceInjector<D> {
    pub fn new(document: D) -> Self {
        Self { document }
    }

    /// The underlying document.
    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    /// Add a script reference to the current document.
    ///
    /// `href` is passed through verbatim — no validation, no deduplication.
    pub fn add_script(&mut self, href: &str) {
        let node = self
            .document
            .create_element("script", &[("type", "text/javascript"), ("src", href)]);
        self.append_to_document(node);
    }

    /// Add a stylesheet reference to the current document.
    pub fn add_stylesheet(&mut self, href: &str) {
        let node = self.document.create_element(
            "link",
            &[("rel", "stylesheet"), ("type", "text/css"), ("href", href)],
        );
        self.append_to_document(node);
    }

    /// Append a prepared node to the document body.
    ///
    /// If the body does not exist at call time the node is dropped — not
    /// logged, not retried, not queued.
    fn append_to_document(&mut self, node: D::Node) {
        if self.document.has_body() {
            self.document.append_child(node);
        }
    }
}
