//! Markup tag shortcuts.
//!
//! Thin wrappers over [`TagNode::child_of`]; they add no semantics beyond the
//! tag name.

use crate::chain::{Container, TagNode};

/// Named descent helpers for common markup tags.
///
/// Implemented for every [`Container`], so they work on the document root and
/// at any depth of a chain.
pub trait HtmlTags: Container + Sized {
    fn div(self) -> TagNode<Self> {
        TagNode::child_of(self, "div")
    }

    fn span(self) -> TagNode<Self> {
        TagNode::child_of(self, "span")
    }

    fn p(self) -> TagNode<Self> {
        TagNode::child_of(self, "p")
    }

    fn a(self) -> TagNode<Self> {
        TagNode::child_of(self, "a")
    }

    fn h1(self) -> TagNode<Self> {
        TagNode::child_of(self, "h1")
    }

    fn img(self) -> TagNode<Self> {
        TagNode::child_of(self, "img")
    }

    fn ul(self) -> TagNode<Self> {
        TagNode::child_of(self, "ul")
    }

    fn li(self) -> TagNode<Self> {
        TagNode::child_of(self, "li")
    }

    fn table(self) -> TagNode<Self> {
        TagNode::child_of(self, "table")
    }

    fn tr(self) -> TagNode<Self> {
        TagNode::child_of(self, "tr")
    }

    fn th(self) -> TagNode<Self> {
        TagNode::child_of(self, "th")
    }

    fn td(self) -> TagNode<Self> {
        TagNode::child_of(self, "td")
    }
}

impl<T: Container> HtmlTags for T {}
