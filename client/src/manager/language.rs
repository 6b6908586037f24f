//! Language half of the manager: the change-language flow.
//!
//! FLOW
//! ====
//! 1. Record the requested language, persist it, update the label, and
//!    take a new generation number.
//! 2. Notify the server. Failure is logged and does not stop the flow.
//! 3. Fetch the table. Transport or parse failure ends the flow with the
//!    page untouched; an unsuccessful body is dropped silently.
//! 4. Install the table only if no newer request was issued meanwhile.
//!
//! The stored preference is written in step 1 and is not rolled back when
//! step 3 fails; `applied_language` keeps reporting the table on screen.

#[cfg(test)]
#[path = "language_test.rs"]
mod language_test;

use std::rc::Rc;

use super::PreferenceManager;
use crate::dom::{DomWrite, Page};
use crate::i18n::{TranslationTable, display_name, render_pass};
use crate::net::{ApiError, TranslationService};
use crate::util::storage::StorageBackend;

/// How a language flow ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LanguageOutcome {
    /// The table was installed and rendered.
    Applied { language: String, entries: usize },
    /// The server answered without `success`; nothing changed on screen.
    Rejected,
    /// A newer language request was issued before this one finished.
    Superseded,
    /// The fetch failed; nothing changed on screen.
    Failed(ApiError),
}

impl LanguageOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

impl<S, T, P> PreferenceManager<S, T, P>
where
    S: StorageBackend,
    T: TranslationService,
    P: Page,
{
    /// Switch the UI to `language`.
    pub async fn change_language(&self, language: &str) -> LanguageOutcome {
        let generation = self.begin_language_request(language);

        if let Err(err) = self.service.set_language(language).await {
            leptos::logging::warn!("setting language preference failed: language={language} error={err}");
        }

        let response = match self.service.fetch_translations(language).await {
            Ok(response) => response,
            Err(err) => {
                leptos::logging::error!("fetching translations failed: language={language} error={err}");
                return LanguageOutcome::Failed(err);
            }
        };

        if generation != self.generation.get() {
            return LanguageOutcome::Superseded;
        }
        if !response.success {
            return LanguageOutcome::Rejected;
        }

        let resolved = response.language.unwrap_or_else(|| language.to_owned());
        let table = TranslationTable::new(resolved.clone(), response.translations);
        let entries = table.len();
        self.install_translations(table);
        LanguageOutcome::Applied {
            language: resolved,
            entries,
        }
    }

    /// Stored language, or the configured default when missing or blank.
    pub fn stored_language(&self) -> String {
        let default = &self.config.default_language;
        let raw = self.store.load(&self.config.language_key, default);
        if raw.trim().is_empty() {
            default.clone()
        } else {
            raw
        }
    }

    /// Run the language flow for the stored language.
    pub async fn init_language(&self) -> LanguageOutcome {
        let language = self.stored_language();
        self.change_language(&language).await
    }

    /// Replace the table wholesale and render it into the page.
    pub fn install_translations(&self, table: TranslationTable) {
        let table = Rc::new(table);
        {
            let mut state = self.state.borrow_mut();
            state.applied_language = Some(table.language().to_owned());
            state.translations = Rc::clone(&table);
        }
        self.retranslate();
    }

    /// Re-render the current table, e.g. after new marked elements were inserted.
    pub fn retranslate(&self) {
        let table = self.translations();
        let writes = render_pass(&table, &self.page.snapshot(), &self.config.title_key);
        self.page.commit(&writes);
    }

    fn begin_language_request(&self, language: &str) -> u64 {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        self.state.borrow_mut().language = language.to_owned();
        self.store.save(&self.config.language_key, language);
        self.page.commit(&[DomWrite::text_by_id(
            &self.config.language_label_id,
            display_name(language),
        )]);
        generation
    }
}
