// SPDX-License-Identifier: MIT
//! Document port — the capability surface the injector mutates through.
//!
//! The shell's real document lives inside a webview; headless hosts and tests
//! use [`InMemoryDocument`]. Either way the injector only ever sees this
//! trait.

/// Minimal document capabilities: create an element, check for a body,
/// append to it.
pub trait DocumentPort {
    /// A detached element, owned by the document once appended.
    type Node;

    /// Create a detached element with the given tag and attribute map.
    fn create_element(&mut self, tag: &str, attributes: &[(&str, &str)]) -> Self::Node;

    /// Whether the document currently has a body container to append into.
    fn has_body(&self) -> bool;

    /// Append `node` at the end of the body's children.
    ///
    /// Callers check [`has_body`](Self::has_body) first; implementations may
    /// drop the node if the body is absent.
    fn append_child(&mut self, node: Self::Node);
}

// ─── In-memory implementation ────────────────────────────────────────────────

/// An element node in an [`InMemoryDocument`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
}

impl Element {
    /// Look up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// A document held entirely in memory, with an optional body container.
///
/// Starts with an empty body by default; [`detached`](Self::detached) models
/// a document that is not ready yet.
#[derive(Debug)]
pub struct InMemoryDocument {
    body: Option<Vec<Element>>,
}

impl Default for InMemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDocument {
    /// A document with an empty body.
    pub fn new() -> Self {
        Self {
            body: Some(Vec::new()),
        }
    }

    /// A document whose body does not exist yet.
    pub fn detached() -> Self {
        Self { body: None }
    }

    /// Attach an empty body to a detached document.
    pub fn attach_body(&mut self) {
        self.body.get_or_insert_with(Vec::new);
    }

    /// The body's children, or `None` if the body does not exist.
    pub fn body(&self) -> Option<&[Element]> {
        self.body.as_deref()
    }
}

impl DocumentPort for InMemoryDocument {
    type Node = Element;

    fn create_element(&mut self, tag: &str, attributes: &[(&str, &str)]) -> Element {
        Element {
            tag: tag.to_string(),
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    fn has_body(&self) -> bool {
        self.body.is_some()
    }

    fn append_child(&mut self, node: Element) {
        if let Some(body) = &mut self.body {
            body.push(node);
        }
    }
}
