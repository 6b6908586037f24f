//! Render pass: translation table + page snapshot -> DOM writes.
//!
//! The pass is a pure function. Running it twice with the same table and
//! snapshot yields the same writes, and values are emitted as plain text so
//! translation content can never inject markup.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use super::table::TranslationTable;
use crate::dom::{DomWrite, Marker, PageSnapshot, WriteTarget};

/// Plan the writes that bring `snapshot` in line with `table`.
///
/// Every marked element gets a write; unknown keys render as the key itself.
/// The title is only written when `table` has a non-empty `title_key` entry.
pub fn render_pass(table: &TranslationTable, snapshot: &PageSnapshot, title_key: &str) -> Vec<DomWrite> {
    let mut writes = Vec::with_capacity(snapshot.elements.len() + 1);
    for element in &snapshot.elements {
        let target = match element.marker {
            Marker::Content => WriteTarget::Text(element.node),
            Marker::Placeholder => WriteTarget::Placeholder(element.node),
        };
        writes.push(DomWrite::new(target, table.resolve(&element.key)));
    }
    if let Some(title) = table.get(title_key) {
        writes.push(DomWrite::new(WriteTarget::Title, title));
    }
    writes
}
