//! Element, text leaf and the closed child variant.
//!
//! # Responsibility
//! - Hold a node's name, attributes and ordered children.
//! - Provide `&mut` building operations for code that does not know (or
//!   care about) the parent type, such as delegate handlers. A `&mut Element`
//!   is itself a `Container`, so handlers can chain `child`/`up` too.
//!
//! # Invariants
//! - `NodeId` is generated once and never reassigned.
//! - `TextLeaf` is immutable after creation.

use crate::chain::{Container, ElementStore, TagNode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Stable identifier of one element instance.
///
/// Kept as a type alias so identity checks read as intent in signatures.
pub type NodeId = Uuid;

/// Attribute mapping; ordered by key so renderings are deterministic.
pub type Attributes = BTreeMap<String, String>;

/// One markup element with attributes and ordered children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    id: NodeId,
    name: String,
    #[serde(default)]
    attributes: Attributes,
    #[serde(default)]
    children: Vec<Node>,
}

impl Element {
    /// Creates a childless, attribute-free element with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Stable identity assigned at creation.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value stored for `key`, if any.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// All attributes, ordered by key.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Children in append order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Returns whether this element renders as a self-closing marker.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Inserts or overwrites one attribute. Last write wins.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Appends a text leaf. The value is stored verbatim.
    pub fn push_text(&mut self, value: impl Into<String>) -> &mut Self {
        self.children.push(Node::Text(TextLeaf::new(value)));
        self
    }

    /// Appends an already built element (e.g. a detached subtree).
    pub fn push_element(&mut self, element: Element) -> &mut Self {
        self.children.push(Node::Element(element));
        self
    }

    /// Opens a chainable child handle; `up` returns this element.
    pub fn child(&mut self, name: impl Into<String>) -> TagNode<&mut Element> {
        TagNode::child_of(self, name)
    }
}

impl ElementStore for Element {
    fn slot(&self, index: usize) -> Option<&Element> {
        self.children.get(index).and_then(Node::as_element)
    }

    fn slot_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.children.get_mut(index).and_then(Node::as_element_mut)
    }
}

impl Container for Element {
    fn adopt(&mut self, element: Element) -> usize {
        self.children.push(Node::Element(element));
        self.children.len() - 1
    }
}

/// Childless text content, rendered literally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextLeaf {
    value: String,
}

impl TextLeaf {
    /// Creates a leaf holding `value` verbatim.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The literal text.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// One entry in an element's child sequence.
///
/// Child kinds are fixed, so this is a closed variant rather than a trait
/// object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// Nested element.
    Element(Element),
    /// Literal text.
    Text(TextLeaf),
}

impl Node {
    /// The element, if this child is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// Mutable element, if this child is one.
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// The text leaf, if this child is one.
    pub fn as_text(&self) -> Option<&TextLeaf> {
        match self {
            Self::Element(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Self::Element(value)
    }
}

impl From<TextLeaf> for Node {
    fn from(value: TextLeaf) -> Self {
        Self::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{Element, Node};
    use crate::chain::{Container, ElementStore};

    #[test]
    fn new_element_is_empty_leaf() {
        let element = Element::new("img");

        assert!(!element.id().is_nil());
        assert_eq!(element.name(), "img");
        assert!(element.attributes().is_empty());
        assert!(element.is_leaf());
    }

    #[test]
    fn set_attr_overwrites_repeated_key() {
        let mut element = Element::new("div");
        element.set_attr("a", "1").set_attr("a", "2");

        assert_eq!(element.attributes().len(), 1);
        assert_eq!(element.attr("a"), Some("2"));
    }

    #[test]
    fn child_handle_writes_into_the_element_immediately() {
        let mut table = Element::new("table");
        let row_id = {
            let row = table.child("tr");
            let row = row.child("td").text("cell").up();
            row.id()
        };
        table.push_text("tail");

        assert_eq!(table.children().len(), 2);
        let row = table.children()[0].as_element().expect("first child is an element");
        assert_eq!(row.id(), row_id);
        assert_eq!(row.children().len(), 1);
        assert_eq!(
            table.children()[1].as_text().map(|text| text.value()),
            Some("tail")
        );
    }

    #[test]
    fn slots_only_address_element_children() {
        let mut element = Element::new("p");
        element.push_text("t");
        let index = element.adopt(Element::new("b"));

        assert_eq!(index, 1);
        assert!(element.slot(0).is_none());
        assert_eq!(element.slot(1).map(Element::name), Some("b"));
        assert!(element.slot(2).is_none());
    }

    #[test]
    fn fresh_elements_get_distinct_ids() {
        assert_ne!(Element::new("p").id(), Element::new("p").id());
    }

    #[test]
    fn node_accessors_match_variant() {
        let node = Node::from(Element::new("span"));
        assert!(node.as_element().is_some());
        assert!(node.as_text().is_none());
    }
}
