//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! preference logic to improve reuse and testability.

pub mod alert;
pub mod format;
pub mod loading;
pub mod storage;
pub mod table_filter;
pub mod theme;
pub mod validate;
