use super::*;

#[test]
fn default_kind_is_info() {
    assert_eq!(AlertKind::default(), AlertKind::Info);
    assert_eq!(Alert::info("Saved").kind, AlertKind::Info);
}

#[test]
fn class_name_embeds_kind() {
    assert_eq!(
        Alert::new("Saved", AlertKind::Success).class_name(),
        "alert alert-success alert-dismissible fade show"
    );
    assert_eq!(
        Alert::new("Boom", AlertKind::Danger).class_name(),
        "alert alert-danger alert-dismissible fade show"
    );
}

#[test]
fn kind_names_match_bootstrap_contexts() {
    let names: Vec<&str> = [AlertKind::Info, AlertKind::Success, AlertKind::Warning, AlertKind::Danger]
        .into_iter()
        .map(AlertKind::as_str)
        .collect();
    assert_eq!(names, vec!["info", "success", "warning", "danger"]);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn show_alert_is_callable_outside_browser() {
    show_alert(&ClientConfig::default(), &Alert::info("Report generated"));
}
