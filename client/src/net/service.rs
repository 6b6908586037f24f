//! Async seam between the preference manager and the translation server.
//!
//! DESIGN
//! ======
//! The manager only needs four calls, so they live behind
//! [`TranslationService`]. The browser uses [`HttpTranslationService`]
//! (`gloo-net`), the CLI plugs in a `reqwest` client, and tests script
//! responses directly. Futures are `?Send` because the browser event loop is
//! single-threaded.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

use async_trait::async_trait;

use super::api::ApiError;
#[cfg(feature = "hydrate")]
use super::api::{set_language_endpoint, supported_languages_endpoint, translate_endpoint, translations_endpoint};
#[cfg(feature = "hydrate")]
use super::types::{SetLanguageRequest, SupportedLanguagesResponse, TranslateRequest, TranslateResponse};
use super::types::{LanguageInfo, TranslationsResponse};
use crate::i18n::builtin_languages;

/// Server operations used by the language flow.
#[async_trait(?Send)]
pub trait TranslationService {
    /// Tell the server which language the user picked. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure.
    async fn set_language(&self, language: &str) -> Result<(), ApiError>;

    /// Fetch the full translation table for `language`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an undecodable body.
    async fn fetch_translations(&self, language: &str) -> Result<TranslationsResponse, ApiError>;

    /// Languages the server can serve. Defaults to the built-in list.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an undecodable body.
    async fn supported_languages(&self) -> Result<Vec<LanguageInfo>, ApiError> {
        Ok(builtin_languages())
    }

    /// Translate a single key or phrase into `language`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, an undecodable body, or an
    /// unsuccessful response.
    async fn translate_text(&self, text: &str, language: &str) -> Result<String, ApiError>;
}

/// Translation endpoints of the page's own origin, called with `gloo-net`.
///
/// Outside the `hydrate` build every call fails with "not available on server".
#[derive(Clone, Debug, Default)]
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub struct HttpTranslationService {
    base_url: String,
}

impl HttpTranslationService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> ApiError {
    ApiError::new("not available on server")
}

#[async_trait(?Send)]
impl TranslationService for HttpTranslationService {
    async fn set_language(&self, language: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = SetLanguageRequest {
                language: language.to_owned(),
            };
            gloo_net::http::Request::post(&set_language_endpoint(&self.base_url))
                .json(&payload)
                .map_err(|e| ApiError::new(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::new(e.to_string()))?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = language;
            Err(unavailable())
        }
    }

    async fn fetch_translations(&self, language: &str) -> Result<TranslationsResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&translations_endpoint(&self.base_url, language))
                .send()
                .await
                .map_err(|e| ApiError::new(e.to_string()))?;
            resp.json::<TranslationsResponse>()
                .await
                .map_err(|e| ApiError::new(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = language;
            Err(unavailable())
        }
    }

    async fn supported_languages(&self) -> Result<Vec<LanguageInfo>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&supported_languages_endpoint(&self.base_url))
                .send()
                .await
                .map_err(|e| ApiError::new(e.to_string()))?;
            let body: SupportedLanguagesResponse = resp.json().await.map_err(|e| ApiError::new(e.to_string()))?;
            if !body.success || body.languages.is_empty() {
                return Ok(builtin_languages());
            }
            Ok(body.languages)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(builtin_languages())
        }
    }

    async fn translate_text(&self, text: &str, language: &str) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = TranslateRequest {
                text: text.to_owned(),
                language: language.to_owned(),
            };
            let resp = gloo_net::http::Request::post(&translate_endpoint(&self.base_url))
                .json(&payload)
                .map_err(|e| ApiError::new(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::new(e.to_string()))?;
            let body: TranslateResponse = resp.json().await.map_err(|e| ApiError::new(e.to_string()))?;
            translated_text(body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (text, language);
            Err(unavailable())
        }
    }
}

/// Extract the translated string from a `/api/translate` response.
///
/// # Errors
///
/// Returns an error when the response is unsuccessful or carries no text.
pub fn translated_text(body: super::types::TranslateResponse) -> Result<String, ApiError> {
    if !body.success {
        return Err(ApiError::new("translation request failed"));
    }
    body.translated_text
        .ok_or_else(|| ApiError::new("translation response missing `translated_text`"))
}
