//! In-memory preference state.
//!
//! DESIGN
//! ======
//! `language` is what the user last asked for and is persisted immediately.
//! `applied_language` is the language of the table actually on screen. They
//! diverge when a translation fetch fails; the manager exposes both instead
//! of hiding the gap.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use std::rc::Rc;

use crate::config::ClientConfig;
use crate::i18n::TranslationTable;
use crate::util::theme::Theme;

/// Active theme, requested language, and the translation table on screen.
#[derive(Clone, Debug)]
pub struct PreferenceState {
    pub theme: Theme,
    pub language: String,
    pub applied_language: Option<String>,
    pub translations: Rc<TranslationTable>,
}

impl PreferenceState {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            theme: config.default_theme,
            language: config.default_language.clone(),
            applied_language: None,
            translations: Rc::new(TranslationTable::empty(config.default_language.clone())),
        }
    }

    /// Whether the table on screen matches the requested language.
    pub fn is_in_sync(&self) -> bool {
        self.applied_language.as_deref() == Some(self.language.as_str())
    }
}

impl Default for PreferenceState {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}
