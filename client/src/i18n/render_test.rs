use std::collections::BTreeMap;

use super::*;
use crate::dom::{MemoryPage, NodeId, Page};

fn table(pairs: &[(&str, &str)]) -> TranslationTable {
    let entries: BTreeMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    TranslationTable::new("en", entries)
}

#[test]
fn known_key_sets_text() {
    let mut snapshot = PageSnapshot::default();
    snapshot.push(NodeId(0), Marker::Content, "greeting");
    let writes = render_pass(&table(&[("greeting", "Hello")]), &snapshot, "page_title");
    assert_eq!(writes, vec![DomWrite::new(WriteTarget::Text(NodeId(0)), "Hello")]);
}

#[test]
fn unknown_key_keeps_key_visible() {
    let page = MemoryPage::new();
    let node = page.push_text("missing", "");
    let writes = render_pass(&table(&[("greeting", "Hello")]), &page.snapshot(), "page_title");
    page.commit(&writes);
    assert_eq!(page.text(node).as_deref(), Some("missing"));
}

#[test]
fn placeholder_uses_same_fallback_rule() {
    let page = MemoryPage::new();
    let email = page.push_placeholder("email");
    let phone = page.push_placeholder("phone");
    let writes = render_pass(&table(&[("email", "ಇಮೇಲ್")]), &page.snapshot(), "page_title");
    page.commit(&writes);
    assert_eq!(page.placeholder(email).as_deref(), Some("ಇಮೇಲ್"));
    assert_eq!(page.placeholder(phone).as_deref(), Some("phone"));
}

#[test]
fn title_key_overwrites_title() {
    let page = MemoryPage::with_title("Smart CKD Health");
    let writes = render_pass(&table(&[("page_title", "My Page")]), &page.snapshot(), "page_title");
    page.commit(&writes);
    assert_eq!(page.title(), "My Page");
}

#[test]
fn missing_title_key_leaves_title_untouched() {
    let page = MemoryPage::with_title("Smart CKD Health");
    let writes = render_pass(&table(&[("greeting", "Hello")]), &page.snapshot(), "page_title");
    assert!(writes.iter().all(|w| w.target != WriteTarget::Title));
    page.commit(&writes);
    assert_eq!(page.title(), "Smart CKD Health");
}

#[test]
fn rerunning_with_same_table_is_idempotent() {
    let page = MemoryPage::new();
    let node = page.push_text("greeting", "greeting");
    let t = table(&[("greeting", "<b>Hello</b> & bye")]);
    page.commit(&render_pass(&t, &page.snapshot(), "page_title"));
    let first = page.text(node);
    page.commit(&render_pass(&t, &page.snapshot(), "page_title"));
    assert_eq!(page.text(node), first);
    assert_eq!(first.as_deref(), Some("<b>Hello</b> & bye"));
}
