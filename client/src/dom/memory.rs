//! In-memory [`Page`] used by tests and headless callers.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::RefCell;
use std::collections::BTreeMap;

use super::{DomWrite, Marker, NodeId, Page, PageSnapshot, WriteTarget};

#[derive(Clone, Debug)]
struct MemoryElement {
    marker: Marker,
    key: String,
    text: String,
    placeholder: Option<String>,
}

#[derive(Debug, Default)]
struct MemoryDocument {
    elements: Vec<MemoryElement>,
    title: String,
    root_attributes: BTreeMap<String, String>,
    classes: BTreeMap<String, String>,
    texts: BTreeMap<String, String>,
    commits: usize,
}

/// A document model holding marked elements, a title, and id-addressed nodes.
#[derive(Debug, Default)]
pub struct MemoryPage {
    doc: RefCell<MemoryDocument>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        let page = Self::new();
        page.doc.borrow_mut().title = title.into();
        page
    }

    /// Add a content-marked element showing `initial` until translated.
    pub fn push_text(&self, key: impl Into<String>, initial: impl Into<String>) -> NodeId {
        self.push(MemoryElement {
            marker: Marker::Content,
            key: key.into(),
            text: initial.into(),
            placeholder: None,
        })
    }

    /// Add a placeholder-marked input with no placeholder yet.
    pub fn push_placeholder(&self, key: impl Into<String>) -> NodeId {
        self.push(MemoryElement {
            marker: Marker::Placeholder,
            key: key.into(),
            text: String::new(),
            placeholder: None,
        })
    }

    fn push(&self, element: MemoryElement) -> NodeId {
        let mut doc = self.doc.borrow_mut();
        doc.elements.push(element);
        NodeId(doc.elements.len() - 1)
    }

    pub fn text(&self, node: NodeId) -> Option<String> {
        self.doc.borrow().elements.get(node.0).map(|el| el.text.clone())
    }

    pub fn placeholder(&self, node: NodeId) -> Option<String> {
        self.doc
            .borrow()
            .elements
            .get(node.0)
            .and_then(|el| el.placeholder.clone())
    }

    pub fn title(&self) -> String {
        self.doc.borrow().title.clone()
    }

    pub fn root_attribute(&self, name: &str) -> Option<String> {
        self.doc.borrow().root_attributes.get(name).cloned()
    }

    /// Class last written to the element with `id`.
    pub fn class_of(&self, id: &str) -> Option<String> {
        self.doc.borrow().classes.get(id).cloned()
    }

    /// Text last written to the element with `id`.
    pub fn text_of(&self, id: &str) -> Option<String> {
        self.doc.borrow().texts.get(id).cloned()
    }

    /// Number of non-empty commits applied so far.
    pub fn commit_count(&self) -> usize {
        self.doc.borrow().commits
    }
}

impl Page for MemoryPage {
    fn snapshot(&self) -> PageSnapshot {
        let doc = self.doc.borrow();
        let mut snapshot = PageSnapshot::default();
        for (index, element) in doc.elements.iter().enumerate() {
            snapshot.push(NodeId(index), element.marker, element.key.clone());
        }
        snapshot
    }

    fn commit(&self, writes: &[DomWrite]) {
        if writes.is_empty() {
            return;
        }
        let mut doc = self.doc.borrow_mut();
        doc.commits += 1;
        for write in writes {
            let value = write.value.clone();
            match &write.target {
                WriteTarget::Text(node) => {
                    if let Some(el) = doc.elements.get_mut(node.0) {
                        el.text = value;
                    }
                }
                WriteTarget::Placeholder(node) => {
                    if let Some(el) = doc.elements.get_mut(node.0) {
                        el.placeholder = Some(value);
                    }
                }
                WriteTarget::Title => doc.title = value,
                WriteTarget::RootAttribute(name) => {
                    doc.root_attributes.insert(name.clone(), value);
                }
                WriteTarget::ClassName(id) => {
                    doc.classes.insert(id.clone(), value);
                }
                WriteTarget::TextById(id) => {
                    doc.texts.insert(id.clone(), value);
                }
            }
        }
    }
}
