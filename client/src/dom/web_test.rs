#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::dom::WriteTarget;

#[test]
fn snapshot_is_empty_outside_browser() {
    let page = WebPage::new(&ClientConfig::default());
    assert!(page.snapshot().elements.is_empty());
}

#[test]
fn commit_is_noop_but_callable() {
    let page = WebPage::new(&ClientConfig::default());
    page.commit(&[DomWrite::new(WriteTarget::Title, "Dashboard")]);
}
