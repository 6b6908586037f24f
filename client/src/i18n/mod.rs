//! Translation tables and the render pass that applies them.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server owns every translation string. The client fetches one table
//! per language, swaps it in whole, and re-renders all marked elements.

pub mod languages;
pub mod render;
pub mod table;

pub use languages::{builtin_languages, display_name};
pub use render::render_pass;
pub use table::TranslationTable;
