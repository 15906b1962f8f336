//! Textual rendering.
//!
//! Grammar, ASCII, values written verbatim (callers escape beforehand):
//!
//! ```text
//! element   := "<" name (attr)* (children | "/>")
//! attr      := " " key "=\"" value "\""
//! children  := ">" child* "</" name ">"
//! child     := element | literal-text
//! ```
//!
//! `Display` is the streaming path; `render` materializes it into a `String`.

use crate::document::Document;
use crate::model::element::{Element, Node, TextLeaf};
use std::fmt::{self, Display, Formatter};
use std::io;

impl Element {
    /// Renders this element and its subtree into a `String`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Streams the rendering into `writer`.
    pub fn write_to<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{}", self)
    }
}

impl Node {
    /// Renders this child into a `String`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name())?;
        for (key, value) in self.attributes() {
            write!(f, " {key}=\"{value}\"")?;
        }
        if self.is_leaf() {
            return f.write_str("/>");
        }
        f.write_str(">")?;
        for child in self.children() {
            Display::fmt(child, f)?;
        }
        write!(f, "</{}>", self.name())
    }
}

impl Display for TextLeaf {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(element) => Display::fmt(element, f),
            Self::Text(text) => Display::fmt(text, f),
        }
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for element in self.elements() {
            Display::fmt(element, f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::model::element::{Element, Node, TextLeaf};

    #[test]
    fn childless_element_self_closes() {
        let mut img = Element::new("img");
        img.set_attr("src", "a.png");
        assert_eq!(img.render(), "<img src=\"a.png\"/>");
    }

    #[test]
    fn attributes_render_in_key_order() {
        let mut div = Element::new("div");
        div.set_attr("z", "1").set_attr("a", "2");
        assert_eq!(div.render(), "<div a=\"2\" z=\"1\"/>");
    }

    #[test]
    fn text_is_written_verbatim() {
        let node = Node::Text(TextLeaf::new("a < b & \"c\""));
        assert_eq!(node.render(), "a < b & \"c\"");
    }

    #[test]
    fn nested_children_render_recursively() {
        let mut ul = Element::new("ul");
        ul.child("li").text("one").up();
        ul.child("li").up();
        assert_eq!(ul.render(), "<ul><li>one</li><li/></ul>");
    }
}
