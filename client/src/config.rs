//! Client configuration: storage keys, markup contract, and defaults.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page templates are rendered by the server; this struct names every
//! attribute, element id, and storage key the client relies on so the
//! markup contract lives in one place.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::util::theme::Theme;

/// Settings shared by the preference manager, the DOM page, and the API helpers.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Prefix prepended to every `/api/...` path. Empty means same origin.
    pub base_url: String,
    /// Storage key holding the theme preference.
    pub theme_key: String,
    /// Storage key holding the language preference.
    pub language_key: String,
    pub default_theme: Theme,
    pub default_language: String,
    /// Attribute marking elements whose text content is translated.
    pub content_attribute: String,
    /// Attribute marking inputs whose placeholder is translated.
    pub placeholder_attribute: String,
    /// Translation key reserved for the document title.
    pub title_key: String,
    /// Attribute on `<html>` carrying the active theme.
    pub theme_attribute: String,
    pub theme_icon_id: String,
    pub language_label_id: String,
    pub alert_container_id: String,
    /// Milliseconds before an alert removes itself.
    pub alert_timeout_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            theme_key: "theme".to_owned(),
            language_key: "language".to_owned(),
            default_theme: Theme::Light,
            default_language: "en".to_owned(),
            content_attribute: "data-translate".to_owned(),
            placeholder_attribute: "data-placeholder".to_owned(),
            title_key: "page_title".to_owned(),
            theme_attribute: "data-theme".to_owned(),
            theme_icon_id: "theme-icon".to_owned(),
            language_label_id: "current-language".to_owned(),
            alert_container_id: "alert-container".to_owned(),
            alert_timeout_ms: 5000,
        }
    }
}

impl ClientConfig {
    /// Config pointing API calls at `base_url` with every other field defaulted.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}
