//! Preference & localization manager.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the two persisted preferences (theme, language), the translation
//! table on screen, and the page they are rendered into. Theme changes are
//! synchronous; language changes suspend on the translation server.
//!
//! DESIGN
//! ======
//! All methods take `&self` so overlapping language flows can share one
//! manager on the single-threaded event loop. State sits in a `RefCell`
//! that is never borrowed across an `.await`.

mod language;
mod theme;

#[cfg(test)]
#[path = "test_support.rs"]
mod test_support;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub use language::LanguageOutcome;

use crate::config::ClientConfig;
use crate::dom::Page;
use crate::i18n::TranslationTable;
use crate::net::TranslationService;
use crate::state::PreferenceState;
use crate::util::storage::{PreferenceStore, StorageBackend};
use crate::util::theme::Theme;

/// Coordinates preference persistence, translation fetches, and rendering.
pub struct PreferenceManager<S, T, P> {
    config: ClientConfig,
    store: PreferenceStore<S>,
    service: T,
    page: P,
    state: RefCell<PreferenceState>,
    generation: Cell<u64>,
}

impl<S, T, P> PreferenceManager<S, T, P>
where
    S: StorageBackend,
    T: TranslationService,
    P: Page,
{
    pub fn new(config: ClientConfig, storage: S, service: T, page: P) -> Self {
        let state = PreferenceState::new(&config);
        Self {
            config,
            store: PreferenceStore::new(storage),
            service,
            page,
            state: RefCell::new(state),
            generation: Cell::new(0),
        }
    }

    /// Apply the stored theme, then run the language flow for the stored language.
    pub async fn start(&self) -> LanguageOutcome {
        self.init_theme();
        self.init_language().await
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn store(&self) -> &PreferenceStore<S> {
        &self.store
    }

    pub fn service(&self) -> &T {
        &self.service
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn theme(&self) -> Theme {
        self.state.borrow().theme
    }

    /// Most recently requested language, whether or not its table loaded.
    pub fn language(&self) -> String {
        self.state.borrow().language.clone()
    }

    /// Language of the table currently rendered, if any table was applied.
    pub fn applied_language(&self) -> Option<String> {
        self.state.borrow().applied_language.clone()
    }

    pub fn translations(&self) -> Rc<TranslationTable> {
        Rc::clone(&self.state.borrow().translations)
    }

    /// Translate `key` with the current table, falling back to the key.
    pub fn translate(&self, key: &str) -> String {
        self.state.borrow().translations.resolve(key).to_owned()
    }

    /// Copy of the full state.
    pub fn snapshot(&self) -> PreferenceState {
        self.state.borrow().clone()
    }
}

impl<S, T, P> std::fmt::Debug for PreferenceManager<S, T, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("PreferenceManager")
            .field("theme", &state.theme)
            .field("language", &state.language)
            .field("applied_language", &state.applied_language)
            .field("generation", &self.generation.get())
            .finish_non_exhaustive()
    }
}
