//! JSON DTOs for the language endpoints.
//!
//! DESIGN
//! ======
//! Response flags default to `false` and collections default to empty, so a
//! body missing `success` is treated as an unsuccessful response rather than
//! a parse failure.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/set-language`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetLanguageRequest {
    pub language: String,
}

/// Body of `GET /api/get-translations/{language}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationsResponse {
    #[serde(default)]
    pub success: bool,
    /// Language the server actually served; it falls back to `en` for
    /// unsupported codes.
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub translations: BTreeMap<String, String>,
}

/// One entry of `GET /api/supported-languages`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub code: String,
    pub name: String,
}

/// Body of `GET /api/supported-languages`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedLanguagesResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub languages: Vec<LanguageInfo>,
}

/// Body of `POST /api/translate`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub language: String,
}

/// Response of `POST /api/translate`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub original_text: Option<String>,
    #[serde(default)]
    pub translated_text: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}
