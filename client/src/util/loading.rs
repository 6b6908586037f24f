//! Button loading state: disable, swap in a spinner, restore afterwards.
//!
//! The original label is parked in a `data-original-text` attribute so the
//! state survives re-renders of surrounding markup.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

pub const ORIGINAL_TEXT_ATTRIBUTE: &str = "data-original-text";
pub const LOADING_MARKUP: &str = r#"<span class="loading"></span> Loading..."#;

/// Saved label bookkeeping for one button.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadingLabel {
    original: Option<String>,
}

impl LoadingLabel {
    /// Resume from a previously saved label, e.g. the attribute value.
    pub fn from_saved(saved: Option<String>) -> Self {
        Self { original: saved }
    }

    /// Remember `current` unless a label is already saved, so a second
    /// call while loading does not capture the spinner markup.
    pub fn begin(&mut self, current: &str) {
        if self.original.is_none() {
            self.original = Some(current.to_owned());
        }
    }

    pub fn saved(&self) -> Option<&str> {
        self.original.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.original.is_some()
    }

    /// Take the saved label, leaving the bookkeeping idle.
    pub fn finish(&mut self) -> Option<String> {
        self.original.take()
    }
}

#[cfg(feature = "hydrate")]
pub fn show_loading(button: &web_sys::HtmlButtonElement) {
    let mut label = LoadingLabel::from_saved(button.get_attribute(ORIGINAL_TEXT_ATTRIBUTE));
    label.begin(&button.inner_html());
    button.set_disabled(true);
    if let Some(saved) = label.saved() {
        let _ = button.set_attribute(ORIGINAL_TEXT_ATTRIBUTE, saved);
    }
    button.set_inner_html(LOADING_MARKUP);
}

#[cfg(feature = "hydrate")]
pub fn hide_loading(button: &web_sys::HtmlButtonElement) {
    button.set_disabled(false);
    let mut label = LoadingLabel::from_saved(button.get_attribute(ORIGINAL_TEXT_ATTRIBUTE));
    if let Some(original) = label.finish() {
        button.set_inner_html(&original);
        let _ = button.remove_attribute(ORIGINAL_TEXT_ATTRIBUTE);
    }
}
