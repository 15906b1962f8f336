//! Parent-typed chaining node.
//!
//! # Responsibility
//! - Let callers build a tree as one expression: same-level calls return the
//!   same handle, `child` descends, `up` ascends.
//! - Record the parent's exact static type in the child's type, so a chain
//!   of N descents can be undone by N ascents that land on the original
//!   handle types in reverse order.
//!
//! # Invariants
//! - A child element is appended to its parent the moment it is created; the
//!   handle keeps only the parent plus the child's index in it.
//! - Children are never removed, so a recorded index stays valid for the
//!   lifetime of the handle.
//! - `up` is pure navigation and exists only when `P: Container`.
//!   `TagNode<Detached>` and `Document` have no ascend.

use crate::document::Document;
use crate::model::element::{Element, NodeId};
use log::{error, trace};

// Index handed out when a handle's own element cannot be found; every lookup
// through it misses.
const DANGLING_INDEX: usize = usize::MAX;

/// Indexed access to elements owned by a parent.
pub trait ElementStore {
    /// Element stored at `index`, or `None` if `index` holds no element.
    fn slot(&self, index: usize) -> Option<&Element>;

    /// Mutable element stored at `index`.
    fn slot_mut(&mut self, index: usize) -> Option<&mut Element>;
}

/// Anything a child element can be appended to.
pub trait Container: ElementStore {
    /// Appends `element` after existing children and returns its index.
    fn adopt(&mut self, element: Element) -> usize;
}

impl<S: ElementStore + ?Sized> ElementStore for &mut S {
    fn slot(&self, index: usize) -> Option<&Element> {
        (**self).slot(index)
    }

    fn slot_mut(&mut self, index: usize) -> Option<&mut Element> {
        (**self).slot_mut(index)
    }
}

impl<C: Container + ?Sized> Container for &mut C {
    fn adopt(&mut self, element: Element) -> usize {
        (**self).adopt(element)
    }
}

/// Owner of a parent-free element built outside a chaining context.
///
/// Not a [`Container`], so `TagNode<Detached>` cannot ascend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detached {
    root: Element,
}

impl ElementStore for Detached {
    fn slot(&self, _index: usize) -> Option<&Element> {
        Some(&self.root)
    }

    fn slot_mut(&mut self, _index: usize) -> Option<&mut Element> {
        Some(&mut self.root)
    }
}

/// Handle to an element under construction, typed by the handle it ascends to.
#[derive(Debug)]
pub struct TagNode<P> {
    parent: P,
    index: usize,
    id: NodeId,
}

impl<P: Container> TagNode<P> {
    /// Appends a new element named `name` to `parent` and returns its handle.
    pub fn child_of(mut parent: P, name: impl Into<String>) -> Self {
        let element = Element::new(name);
        let id = element.id();
        trace!(
            "event=node_descend module=chain node_id={} name={}",
            id,
            element.name()
        );
        let index = parent.adopt(element);
        Self { parent, index, id }
    }

    /// Returns the parent handle. The element already lives in it.
    pub fn up(self) -> P {
        trace!("event=node_ascend module=chain node_id={}", self.id);
        self.parent
    }
}

impl<P: ElementStore> TagNode<P> {
    /// Sets one attribute; a repeated key keeps the last value.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.edit(|element| {
            element.set_attr(key, value);
        });
        self
    }

    /// Appends a text leaf.
    pub fn text(mut self, value: impl Into<String>) -> Self {
        self.edit(|element| {
            element.push_text(value);
        });
        self
    }

    /// Runs `handler` against the element being built and keeps chaining.
    ///
    /// `&mut Element` is a [`Container`], so the handler can descend with
    /// `child` or the tag shortcuts just like an inline chain, at any depth.
    pub fn apply<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(&mut Element),
    {
        self.edit(handler);
        self
    }

    /// Descends into a new child element.
    pub fn child(self, name: impl Into<String>) -> TagNode<Self> {
        TagNode::child_of(self, name)
    }

    /// Read-only view of the recorded parent, open child included.
    pub fn parent(&self) -> &P {
        &self.parent
    }

    /// The element this handle builds, as stored in its parent.
    pub fn element(&self) -> Option<&Element> {
        self.parent.slot(self.index)
    }

    /// Identity of the element this handle builds.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Tag name of the element this handle builds.
    pub fn name(&self) -> Option<&str> {
        self.element().map(Element::name)
    }

    fn element_mut(&mut self) -> Option<&mut Element> {
        let element = self.parent.slot_mut(self.index);
        if element.is_none() {
            error!(
                "event=slot_missing module=chain status=error node_id={} index={}",
                self.id, self.index
            );
        }
        element
    }

    fn edit<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut Element),
    {
        if let Some(element) = self.element_mut() {
            edit(element);
        }
    }
}

impl TagNode<Detached> {
    /// Starts a parent-free element, e.g. a reusable subtree or a test fixture.
    ///
    /// There is nothing to ascend to, so `up` does not exist:
    ///
    /// ```compile_fail
    /// use parentchain_core::TagNode;
    ///
    /// let _ = TagNode::detached("orphan").up();
    /// ```
    pub fn detached(name: impl Into<String>) -> Self {
        let root = Element::new(name);
        let id = root.id();
        trace!("event=node_detached module=chain node_id={id}");
        Self {
            parent: Detached { root },
            index: 0,
            id,
        }
    }

    /// Returns the built element.
    pub fn into_element(self) -> Element {
        self.parent.root
    }
}

impl<P: ElementStore> ElementStore for TagNode<P> {
    fn slot(&self, index: usize) -> Option<&Element> {
        self.element()?.slot(index)
    }

    fn slot_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.element_mut()?.slot_mut(index)
    }
}

impl<P: ElementStore> Container for TagNode<P> {
    fn adopt(&mut self, element: Element) -> usize {
        match self.element_mut() {
            Some(own) => own.adopt(element),
            None => DANGLING_INDEX,
        }
    }
}

/// Ascends through every open level back to the document root.
pub trait Finish {
    type Root;

    fn finish(self) -> Self::Root;
}

impl Finish for Document {
    type Root = Document;

    fn finish(self) -> Document {
        self
    }
}

impl<P> Finish for TagNode<P>
where
    P: Container + Finish,
{
    type Root = P::Root;

    fn finish(self) -> Self::Root {
        self.up().finish()
    }
}
