//! Page abstraction: snapshots of translatable elements and batched writes.
//!
//! DESIGN
//! ======
//! Rendering is split into a pure planning step (compute [`DomWrite`]s from
//! a [`PageSnapshot`]) and a commit step owned by the [`Page`]. Planning can
//! be tested without a browser; committing is the only code that touches a
//! live document.
//!
//! Node ids are assigned by the page when it takes a snapshot and are only
//! meaningful to that same page.


pub mod memory;
pub mod web;

pub use memory::MemoryPage;
pub use web::WebPage;

/// How an element opts into translation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Text content is replaced.
    Content,
    /// The `placeholder` attribute is replaced.
    Placeholder,
}

/// Page-assigned handle for a marked element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// An element carrying a translation key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkedElement {
    pub node: NodeId,
    pub marker: Marker,
    pub key: String,
}

/// All marked elements of a page at one point in time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageSnapshot {
    pub elements: Vec<MarkedElement>,
}

impl PageSnapshot {
    pub fn push(&mut self, node: NodeId, marker: Marker, key: impl Into<String>) {
        self.elements.push(MarkedElement {
            node,
            marker,
            key: key.into(),
        });
    }
}

/// The field a write replaces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WriteTarget {
    /// Text content of a content-marked element.
    Text(NodeId),
    /// `placeholder` attribute of a placeholder-marked element.
    Placeholder(NodeId),
    /// The document title.
    Title,
    /// An attribute on the document element (`<html>`).
    RootAttribute(String),
    /// The `class` of the element with this id.
    ClassName(String),
    /// Text content of the element with this id.
    TextById(String),
}

/// A single planned mutation. Values are always plain text, never markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomWrite {
    pub target: WriteTarget,
    pub value: String,
}

impl DomWrite {
    pub fn new(target: WriteTarget, value: impl Into<String>) -> Self {
        Self {
            target,
            value: value.into(),
        }
    }

    pub fn root_attribute(name: &str, value: impl Into<String>) -> Self {
        Self::new(WriteTarget::RootAttribute(name.to_owned()), value)
    }

    pub fn class_name(element_id: &str, value: impl Into<String>) -> Self {
        Self::new(WriteTarget::ClassName(element_id.to_owned()), value)
    }

    pub fn text_by_id(element_id: &str, value: impl Into<String>) -> Self {
        Self::new(WriteTarget::TextById(element_id.to_owned()), value)
    }
}

/// A document the preference manager can read marked elements from and write to.
pub trait Page {
    /// Scan the current document for content- and placeholder-marked elements.
    fn snapshot(&self) -> PageSnapshot;

    /// Apply `writes` in order. Writes whose target no longer exists are skipped.
    fn commit(&self, writes: &[DomWrite]);
}

impl<P: Page + ?Sized> Page for &P {
    fn snapshot(&self) -> PageSnapshot {
        (**self).snapshot()
    }

    fn commit(&self, writes: &[DomWrite]) {
        (**self).commit(writes);
    }
}
