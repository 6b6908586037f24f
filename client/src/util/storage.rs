//! Best-effort key-value persistence for user preferences.
//!
//! Reads and writes go through a [`StorageBackend`]: `localStorage` in the
//! browser, an in-memory map in tests, or a file in the CLI.
//!
//! TRADE-OFFS
//! ==========
//! Persistence never blocks the UI. [`PreferenceStore`] logs backend
//! failures and falls back to the caller's default instead of returning
//! errors, so quota or privacy-mode failures only cost the saved preference.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::BTreeMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Failure reported by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage backend failed: {0}")]
    Backend(String),
    #[error("stored value is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// String key-value storage with `localStorage` semantics.
pub trait StorageBackend {
    /// Read the raw value for `key`; `Ok(None)` when nothing was stored.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be reached or read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

/// Process-local storage used by tests and headless callers.
#[derive(Debug)]
pub struct MemoryStorage {
    items: RefCell<BTreeMap<String, String>>,
    available: bool,
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            items: RefCell::new(BTreeMap::new()),
            available: true,
        }
    }

    /// A backend that fails every call, like `localStorage` in a locked-down browser.
    pub fn unavailable() -> Self {
        Self {
            items: RefCell::new(BTreeMap::new()),
            available: false,
        }
    }

    /// Raw stored value, bypassing the availability flag.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        if !self.available {
            return Err(StorageError::Unavailable);
        }
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if !self.available {
            return Err(StorageError::Unavailable);
        }
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// The browser's `window.localStorage`.
///
/// Outside the `hydrate` build every call reports [`StorageError::Unavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    window
        .local_storage()
        .map_err(|err| StorageError::Backend(format!("{err:?}")))?
        .ok_or(StorageError::Unavailable)
}

impl StorageBackend for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|err| StorageError::Backend(format!("{err:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|err| StorageError::Backend(format!("{err:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

/// Preference persistence with swallow-and-default error handling.
#[derive(Debug, Default)]
pub struct PreferenceStore<S> {
    backend: S,
}

impl<S: StorageBackend> PreferenceStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Return the stored value for `key`, or `default` when absent or unreadable.
    pub fn load(&self, key: &str, default: &str) -> String {
        match self.backend.get_item(key) {
            Ok(Some(value)) => value,
            Ok(None) => default.to_owned(),
            Err(err) => {
                leptos::logging::warn!("preference load failed: key={key} error={err}");
                default.to_owned()
            }
        }
    }

    /// Persist `value` under `key`. Failures are logged, never returned.
    pub fn save(&self, key: &str, value: &str) {
        if let Err(err) = self.backend.set_item(key, value) {
            leptos::logging::error!("preference save failed: key={key} error={err}");
        }
    }

    /// Load a JSON-encoded value, falling back to `default` when absent,
    /// unreadable, or not decodable as `T`.
    pub fn load_json<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.backend.get_item(key) {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => return default,
            Err(err) => {
                leptos::logging::warn!("preference load failed: key={key} error={err}");
                return default;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                leptos::logging::warn!("preference load failed: key={key} error={}", StorageError::from(err));
                default
            }
        }
    }

    /// Persist `value` as JSON under `key`. Failures are logged, never returned.
    pub fn save_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                leptos::logging::error!("preference save failed: key={key} error={}", StorageError::from(err));
                return;
            }
        };
        self.save(key, &raw);
    }
}
