//! Parent-chaining tree builder.
//!
//! Build a markup-like tree as one chained expression: same-level calls
//! (`attr`, `text`, `apply`) return the same handle, `child` descends into a
//! handle typed `TagNode<Self>`, and `up` returns the exact parent type that
//! was descended from.
//!
//! ```
//! use parentchain_core::{Document, HtmlTags};
//!
//! let document = Document::new()
//!     .body()
//!     .div()
//!     .attr("style", "bold")
//!     .text("hi")
//!     .up()
//!     .up();
//!
//! assert_eq!(document.render(), "<body><div style=\"bold\">hi</div></body>");
//! ```

pub mod chain;
pub mod document;
pub mod html;
pub mod logging;
pub mod model;
pub mod render;

pub use chain::{Container, Detached, ElementStore, Finish, TagNode};
pub use document::Document;
pub use html::HtmlTags;
pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::element::{Attributes, Element, Node, NodeId, TextLeaf};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
