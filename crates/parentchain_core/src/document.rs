//! Document root adapter.
//!
//! # Responsibility
//! - Provide the parent-free starting point of every chain.
//! - Expose well-known top-level children as named accessors.
//!
//! # Invariants
//! - Top-level elements join the document as soon as they are opened.
//! - A document has no ascend; chains rooted here stop at `TagNode<Document>::up`.
//! - The document itself is not rendered as a tag, only its elements are.

use crate::chain::{Container, ElementStore, TagNode};
use crate::model::element::Element;
use log::debug;
use serde::{Deserialize, Serialize};
use std::io;

/// Top of a tree built through chaining.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a top-level element named `name`.
    pub fn child(self, name: impl Into<String>) -> TagNode<Self> {
        TagNode::child_of(self, name)
    }

    /// Starts a `head` element.
    pub fn head(self) -> TagNode<Self> {
        self.child("head")
    }

    /// Starts a `body` element.
    pub fn body(self) -> TagNode<Self> {
        self.child("body")
    }

    /// Top-level elements in creation order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Returns whether no top-level element was opened yet.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Renders every top-level element, concatenated.
    pub fn render(&self) -> String {
        let rendered = self.to_string();
        debug!(
            "event=document_render module=document status=ok elements={} bytes={}",
            self.elements.len(),
            rendered.len()
        );
        rendered
    }

    /// Streams the rendering into `writer`.
    pub fn write_to<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        for element in &self.elements {
            element.write_to(&mut writer)?;
        }
        Ok(())
    }
}

impl ElementStore for Document {
    fn slot(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    fn slot_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.elements.get_mut(index)
    }
}

impl Container for Document {
    fn adopt(&mut self, element: Element) -> usize {
        self.elements.push(element);
        self.elements.len() - 1
    }
}
