//! Languages the portal ships with and their display names.

#[cfg(test)]
#[path = "languages_test.rs"]
mod languages_test;

use crate::net::types::LanguageInfo;

const BUILTIN: &[(&str, &str)] = &[("en", "English"), ("kn", "ಕನ್ನಡ")];

/// Languages known without asking the server.
pub fn builtin_languages() -> Vec<LanguageInfo> {
    BUILTIN
        .iter()
        .map(|(code, name)| LanguageInfo {
            code: (*code).to_owned(),
            name: (*name).to_owned(),
        })
        .collect()
}

/// Native name for a language code, or the code itself when unknown.
pub fn display_name(code: &str) -> &str {
    BUILTIN
        .iter()
        .find(|(known, _)| *known == code)
        .map_or(code, |(_, name)| *name)
}
