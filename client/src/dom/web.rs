//! Live browser [`Page`] backed by `web-sys`.
//!
//! Snapshots number content-marked and placeholder-marked elements in
//! document order, one sequence per marker. Commits re-run the same
//! selectors; snapshot and commit happen in the same synchronous turn of the
//! event loop, so the numbering is stable between them.
//!
//! Outside the `hydrate` build the page is empty and commits are no-ops.

#[cfg(test)]
#[path = "web_test.rs"]
mod web_test;

use super::{DomWrite, Page, PageSnapshot};
#[cfg(feature = "hydrate")]
use super::{Marker, NodeId, WriteTarget};
use crate::config::ClientConfig;

/// The current `window.document`.
#[derive(Clone, Debug)]
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub struct WebPage {
    content_attribute: String,
    placeholder_attribute: String,
}

impl WebPage {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            content_attribute: config.content_attribute.clone(),
            placeholder_attribute: config.placeholder_attribute.clone(),
        }
    }
}

#[cfg(feature = "hydrate")]
fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

#[cfg(feature = "hydrate")]
fn marked_elements(doc: &web_sys::Document, attribute: &str) -> Vec<web_sys::Element> {
    use wasm_bindgen::JsCast;

    let Ok(list) = doc.query_selector_all(&format!("[{attribute}]")) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

impl Page for WebPage {
    fn snapshot(&self) -> PageSnapshot {
        #[cfg(feature = "hydrate")]
        {
            let mut snapshot = PageSnapshot::default();
            let Some(doc) = document() else {
                return snapshot;
            };
            for (marker, attribute) in [
                (Marker::Content, &self.content_attribute),
                (Marker::Placeholder, &self.placeholder_attribute),
            ] {
                for (index, el) in marked_elements(&doc, attribute).iter().enumerate() {
                    if let Some(key) = el.get_attribute(attribute) {
                        snapshot.push(NodeId(index), marker, key);
                    }
                }
            }
            snapshot
        }
        #[cfg(not(feature = "hydrate"))]
        {
            PageSnapshot::default()
        }
    }

    fn commit(&self, writes: &[DomWrite]) {
        #[cfg(feature = "hydrate")]
        {
            let Some(doc) = document() else {
                return;
            };
            let content = marked_elements(&doc, &self.content_attribute);
            let placeholders = marked_elements(&doc, &self.placeholder_attribute);
            for write in writes {
                let value = write.value.as_str();
                match &write.target {
                    WriteTarget::Text(node) => {
                        if let Some(el) = content.get(node.0) {
                            el.set_text_content(Some(value));
                        }
                    }
                    WriteTarget::Placeholder(node) => {
                        if let Some(el) = placeholders.get(node.0) {
                            let _ = el.set_attribute("placeholder", value);
                        }
                    }
                    WriteTarget::Title => doc.set_title(value),
                    WriteTarget::RootAttribute(name) => {
                        if let Some(root) = doc.document_element() {
                            let _ = root.set_attribute(name, value);
                        }
                    }
                    WriteTarget::ClassName(id) => {
                        if let Some(el) = doc.get_element_by_id(id) {
                            el.set_class_name(value);
                        }
                    }
                    WriteTarget::TextById(id) => {
                        if let Some(el) = doc.get_element_by_id(id) {
                            el.set_text_content(Some(value));
                        }
                    }
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = writes;
        }
    }
}
