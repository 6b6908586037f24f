use super::*;

#[test]
fn snapshot_lists_elements_in_insertion_order() {
    let page = MemoryPage::new();
    let a = page.push_text("greeting", "greeting");
    let b = page.push_placeholder("email");
    let snapshot = page.snapshot();
    assert_eq!(snapshot.elements.len(), 2);
    assert_eq!(snapshot.elements[0].node, a);
    assert_eq!(snapshot.elements[0].marker, Marker::Content);
    assert_eq!(snapshot.elements[1].node, b);
    assert_eq!(snapshot.elements[1].key, "email");
}

#[test]
fn commit_applies_every_target_kind() {
    let page = MemoryPage::with_title("Smart CKD Health");
    let text = page.push_text("greeting", "greeting");
    let input = page.push_placeholder("email");
    page.commit(&[
        DomWrite::new(WriteTarget::Text(text), "Hello"),
        DomWrite::new(WriteTarget::Placeholder(input), "Email"),
        DomWrite::new(WriteTarget::Title, "Dashboard"),
        DomWrite::root_attribute("data-theme", "dark"),
        DomWrite::class_name("theme-icon", "fas fa-sun"),
        DomWrite::text_by_id("current-language", "English"),
    ]);
    assert_eq!(page.text(text).as_deref(), Some("Hello"));
    assert_eq!(page.placeholder(input).as_deref(), Some("Email"));
    assert_eq!(page.title(), "Dashboard");
    assert_eq!(page.root_attribute("data-theme").as_deref(), Some("dark"));
    assert_eq!(page.class_of("theme-icon").as_deref(), Some("fas fa-sun"));
    assert_eq!(page.text_of("current-language").as_deref(), Some("English"));
    assert_eq!(page.commit_count(), 1);
}

#[test]
fn commit_skips_unknown_nodes_and_empty_batches() {
    let page = MemoryPage::new();
    page.commit(&[]);
    page.commit(&[DomWrite::new(WriteTarget::Text(NodeId(9)), "ignored")]);
    assert_eq!(page.commit_count(), 1);
    assert_eq!(page.text(NodeId(9)), None);
}
