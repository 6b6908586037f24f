//! Networking modules for the preference and translation endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the JSON wire schema, `api` holds endpoint paths and the
//! generic JSON helper, and `service` is the async seam the preference
//! manager talks to.

pub mod api;
pub mod service;
pub mod types;

pub use api::ApiError;
pub use service::{HttpTranslationService, TranslationService};
