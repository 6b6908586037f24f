//! Theme half of the manager: apply, toggle, and restore on start-up.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use super::PreferenceManager;
use crate::dom::Page;
use crate::net::TranslationService;
use crate::util::storage::StorageBackend;
use crate::util::theme::Theme;

impl<S, T, P> PreferenceManager<S, T, P>
where
    S: StorageBackend,
    T: TranslationService,
    P: Page,
{
    /// Make `theme` active: update state, the page, and storage.
    pub fn apply_theme(&self, theme: Theme) {
        self.state.borrow_mut().theme = theme;
        self.page.commit(&theme.writes(&self.config));
        self.store.save(&self.config.theme_key, theme.as_str());
    }

    /// Switch to the other theme and return it.
    pub fn toggle_theme(&self) -> Theme {
        let next = self.theme().toggled();
        self.apply_theme(next);
        next
    }

    /// Stored theme, or the configured default when missing or invalid.
    pub fn stored_theme(&self) -> Theme {
        let default = self.config.default_theme;
        let raw = self.store.load(&self.config.theme_key, default.as_str());
        Theme::parse(&raw).unwrap_or(default)
    }

    /// Apply the stored theme and return it.
    pub fn init_theme(&self) -> Theme {
        let theme = self.stored_theme();
        self.apply_theme(theme);
        theme
    }
}
