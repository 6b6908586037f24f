use super::*;
use crate::dom::WriteTarget;

#[test]
fn parse_accepts_known_values() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse(" dark "), Some(Theme::Dark));
}

#[test]
fn parse_rejects_unknown_values() {
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse("sepia"), None);
}

#[test]
fn toggled_is_an_involution() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_ne!(theme.toggled(), theme);
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

#[test]
fn icon_shows_the_target_theme() {
    assert_eq!(Theme::Light.icon_class(), "fas fa-moon");
    assert_eq!(Theme::Dark.icon_class(), "fas fa-sun");
}

#[test]
fn writes_cover_root_attribute_and_icon() {
    let config = ClientConfig::default();
    let writes = Theme::Dark.writes(&config);
    assert_eq!(writes.len(), 2);
    assert_eq!(writes[0].target, WriteTarget::RootAttribute("data-theme".to_owned()));
    assert_eq!(writes[0].value, "dark");
    assert_eq!(writes[1].target, WriteTarget::ClassName("theme-icon".to_owned()));
    assert_eq!(writes[1].value, "fas fa-sun");
}

#[test]
fn from_str_reports_unknown_theme() {
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
    assert_eq!(
        "neon".parse::<Theme>(),
        Err(UnknownTheme("neon".to_owned()))
    );
}

#[test]
fn serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    assert_eq!(serde_json::from_str::<Theme>("\"light\"").unwrap(), Theme::Light);
}
