//! # ckd-client
//!
//! Browser-side preference and localization layer for the CKD health portal.
//! Compiled to WASM with the `hydrate` feature; without it every browser
//! binding is a deterministic no-op so the core runs and tests natively.
//!
//! The `manager` module owns the theme and language preferences, the
//! `i18n` module turns translation tables into DOM writes, and `dom` is the
//! seam between those writes and a concrete page.

pub mod config;
pub mod dom;
pub mod i18n;
pub mod manager;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod app;
#[cfg(feature = "hydrate")]
pub mod bootstrap;

pub use config::ClientConfig;
pub use manager::{LanguageOutcome, PreferenceManager};

/// WASM entry point: installs console logging and boots the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    app::boot();
}
