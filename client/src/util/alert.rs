//! Dismissible Bootstrap alerts stacked in a fixed corner container.
//!
//! Messages are inserted as text nodes, never as HTML, so server error
//! strings cannot inject markup.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

use crate::config::ClientConfig;

/// Container classes for the on-demand alert stack.
pub const CONTAINER_CLASS: &str = "position-fixed top-0 end-0 p-3";
pub const CONTAINER_Z_INDEX: &str = "1050";

/// Bootstrap contextual alert style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertKind {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl AlertKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

/// A message to flash at the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub kind: AlertKind,
}

impl Alert {
    pub fn new(message: impl Into<String>, kind: AlertKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, AlertKind::Info)
    }

    pub fn class_name(&self) -> String {
        format!("alert alert-{} alert-dismissible fade show", self.kind.as_str())
    }
}

#[cfg(feature = "hydrate")]
fn alert_container(doc: &web_sys::Document, id: &str) -> Option<web_sys::Element> {
    use wasm_bindgen::JsCast;

    if let Some(existing) = doc.get_element_by_id(id) {
        return Some(existing);
    }
    let container = doc.create_element("div").ok()?;
    container.set_id(id);
    container.set_class_name(CONTAINER_CLASS);
    if let Some(html) = container.dyn_ref::<web_sys::HtmlElement>() {
        let _ = html.style().set_property("z-index", CONTAINER_Z_INDEX);
    }
    doc.body()?.append_child(&container).ok()?;
    Some(container)
}

/// Show `alert` and remove it after `config.alert_timeout_ms`.
pub fn show_alert(config: &ClientConfig, alert: &Alert) {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(container) = alert_container(&doc, &config.alert_container_id) else {
            return;
        };
        let Ok(el) = doc.create_element("div") else {
            return;
        };
        el.set_class_name(&alert.class_name());
        let _ = el.append_child(&doc.create_text_node(&alert.message));
        if let Ok(close) = doc.create_element("button") {
            let _ = close.set_attribute("type", "button");
            close.set_class_name("btn-close");
            let _ = close.set_attribute("data-bs-dismiss", "alert");
            let _ = el.append_child(&close);
        }
        if container.append_child(&el).is_err() {
            return;
        }
        gloo_timers::callback::Timeout::new(config.alert_timeout_ms, move || {
            if el.parent_node().is_some() {
                el.remove();
            }
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        leptos::logging::log!("[{}] {}", alert.kind.as_str(), alert.message);
    }
}
