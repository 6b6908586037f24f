//! Per-language translation table.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::collections::BTreeMap;

/// Mapping from translation key to display text for one language.
///
/// Tables are immutable once built; a language change replaces the table
/// wholesale rather than merging entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TranslationTable {
    language: String,
    entries: BTreeMap<String, String>,
}

impl TranslationTable {
    pub fn new(language: impl Into<String>, entries: BTreeMap<String, String>) -> Self {
        Self {
            language: language.into(),
            entries,
        }
    }

    /// An empty table tagged with `language`.
    pub fn empty(language: impl Into<String>) -> Self {
        Self::new(language, BTreeMap::new())
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Non-empty translation for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Translation for `key`, or the key itself so the UI never goes blank.
    pub fn resolve<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
