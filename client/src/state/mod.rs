//! Client-side state owned by the preference manager.

pub mod prefs;

pub use prefs::PreferenceState;
