//! Scripted translation service and helpers shared by manager tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::task::Poll;

use async_trait::async_trait;
use tokio::sync::oneshot;

use super::PreferenceManager;
use crate::config::ClientConfig;
use crate::dom::MemoryPage;
use crate::net::types::TranslationsResponse;
use crate::net::{ApiError, TranslationService};
use crate::util::storage::MemoryStorage;

pub(crate) type Reply = Result<TranslationsResponse, ApiError>;

pub(crate) type TestManager = PreferenceManager<MemoryStorage, FakeService, MemoryPage>;

/// Translation service whose replies are scripted per language.
#[derive(Default)]
pub(crate) struct FakeService {
    ready: RefCell<HashMap<String, Reply>>,
    pending: RefCell<HashMap<String, oneshot::Receiver<Reply>>>,
    notify_error: Option<ApiError>,
    pub(crate) notified: RefCell<Vec<String>>,
    pub(crate) fetched: RefCell<Vec<String>>,
}

impl FakeService {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Answer every fetch for `language` with a successful table.
    pub(crate) fn with_table(self, language: &str, pairs: &[(&str, &str)]) -> Self {
        self.with_reply(language, Ok(ok_table(None, pairs)))
    }

    pub(crate) fn with_reply(self, language: &str, reply: Reply) -> Self {
        self.ready.borrow_mut().insert(language.to_owned(), reply);
        self
    }

    /// Hold the next fetch for `language` until the returned sender fires.
    pub(crate) fn with_pending(self, language: &str) -> (Self, oneshot::Sender<Reply>) {
        let (tx, rx) = oneshot::channel();
        self.pending.borrow_mut().insert(language.to_owned(), rx);
        (self, tx)
    }

    pub(crate) fn failing_notify(mut self) -> Self {
        self.notify_error = Some(ApiError::new("connection refused"));
        self
    }
}

#[async_trait(?Send)]
impl TranslationService for FakeService {
    async fn set_language(&self, language: &str) -> Result<(), ApiError> {
        self.notified.borrow_mut().push(language.to_owned());
        match &self.notify_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    async fn fetch_translations(&self, language: &str) -> Result<TranslationsResponse, ApiError> {
        self.fetched.borrow_mut().push(language.to_owned());
        let pending = self.pending.borrow_mut().remove(language);
        if let Some(rx) = pending {
            return rx.await.unwrap_or_else(|_| Err(ApiError::new("reply dropped")));
        }
        self.ready
            .borrow()
            .get(language)
            .cloned()
            .unwrap_or_else(|| Err(ApiError::new(format!("no reply scripted for {language}"))))
    }

    async fn translate_text(&self, text: &str, language: &str) -> Result<String, ApiError> {
        let ready = self.ready.borrow();
        let Some(Ok(response)) = ready.get(language) else {
            return Err(ApiError::new("translation request failed"));
        };
        Ok(response
            .translations
            .get(text)
            .cloned()
            .unwrap_or_else(|| text.to_owned()))
    }
}

/// A successful translations body.
pub(crate) fn ok_table(language: Option<&str>, pairs: &[(&str, &str)]) -> TranslationsResponse {
    TranslationsResponse {
        success: true,
        language: language.map(str::to_owned),
        translations: pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect(),
    }
}

pub(crate) fn manager(service: FakeService) -> TestManager {
    PreferenceManager::new(
        ClientConfig::default(),
        MemoryStorage::new(),
        service,
        MemoryPage::with_title("Smart CKD Health"),
    )
}

/// Poll `fut` exactly once from the current task.
pub(crate) async fn poll_once<F: Future>(mut fut: Pin<&mut F>) -> Poll<F::Output> {
    std::future::poll_fn(|cx| Poll::Ready(fut.as_mut().poll(cx))).await
}
