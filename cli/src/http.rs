//! `reqwest` implementation of the translation service.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::time::Duration;

use async_trait::async_trait;
use ckd_client::i18n::builtin_languages;
use ckd_client::net::api::{
    interpret_response, set_language_endpoint, supported_languages_endpoint, translate_endpoint,
    translations_endpoint,
};
use ckd_client::net::service::translated_text;
use ckd_client::net::types::{
    LanguageInfo, SetLanguageRequest, SupportedLanguagesResponse, TranslateRequest, TranslateResponse,
    TranslationsResponse,
};
use ckd_client::net::{ApiError, TranslationService};
use serde_json::Value;

/// Talks to the portal's language endpoints over HTTP.
#[derive(Clone, Debug)]
pub struct ReqwestTranslationService {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTranslationService {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("ckd-prefs/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::new(err.to_string())
}

#[async_trait(?Send)]
impl TranslationService for ReqwestTranslationService {
    async fn set_language(&self, language: &str) -> Result<(), ApiError> {
        let url = set_language_endpoint(&self.base_url);
        tracing::debug!(%url, language, "sending language preference");
        let payload = SetLanguageRequest {
            language: language.to_owned(),
        };
        self.client.post(url).json(&payload).send().await.map_err(transport)?;
        Ok(())
    }

    async fn fetch_translations(&self, language: &str) -> Result<TranslationsResponse, ApiError> {
        let url = translations_endpoint(&self.base_url, language);
        tracing::debug!(%url, "fetching translations");
        let resp = self.client.get(url).send().await.map_err(transport)?;
        resp.json::<TranslationsResponse>().await.map_err(transport)
    }

    async fn supported_languages(&self) -> Result<Vec<LanguageInfo>, ApiError> {
        let url = supported_languages_endpoint(&self.base_url);
        let resp = self.client.get(url).send().await.map_err(transport)?;
        let body: SupportedLanguagesResponse = resp.json().await.map_err(transport)?;
        if !body.success || body.languages.is_empty() {
            tracing::warn!("server returned no languages; using built-in list");
            return Ok(builtin_languages());
        }
        Ok(body.languages)
    }

    async fn translate_text(&self, text: &str, language: &str) -> Result<String, ApiError> {
        let payload = TranslateRequest {
            text: text.to_owned(),
            language: language.to_owned(),
        };
        let resp = self
            .client
            .post(translate_endpoint(&self.base_url))
            .json(&payload)
            .send()
            .await
            .map_err(transport)?;
        let ok = resp.status().is_success();
        let body: Value = resp.json().await.map_err(transport)?;
        let body = interpret_response(ok, body)?;
        let body: TranslateResponse = serde_json::from_value(body).map_err(|err| ApiError::new(err.to_string()))?;
        translated_text(body)
    }
}
