//! Browser start-up and the functions page templates call.
//!
//! SYSTEM CONTEXT
//! ==============
//! Templates call `toggleTheme()` and `changeLanguage(code)` from inline
//! handlers. Both reach the single page-wide manager installed by [`boot`].
//! The remaining exports are stateless helpers for page scripts.

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;
use wasm_bindgen::prelude::*;

use crate::bootstrap;
use crate::config::ClientConfig;
use crate::dom::WebPage;
use crate::manager::PreferenceManager;
use crate::net::HttpTranslationService;
use crate::net::api::api_call_json;
use crate::util::alert::{Alert, AlertKind, show_alert};
use crate::util::format::{format_date_named, format_number, format_percentage, parse_date};
use crate::util::loading::{hide_loading, show_loading};
use crate::util::storage::{LocalStorage, PreferenceStore};
use crate::util::validate;

/// Manager type used in the browser.
pub type BrowserManager = PreferenceManager<LocalStorage, HttpTranslationService, WebPage>;

thread_local! {
    static MANAGER: RefCell<Option<Rc<BrowserManager>>> = const { RefCell::new(None) };
}

fn manager() -> Option<Rc<BrowserManager>> {
    MANAGER.with(|slot| slot.borrow().clone())
}

fn page_config() -> ClientConfig {
    manager().map_or_else(ClientConfig::default, |m| m.config().clone())
}

/// `None` for `undefined` and values `JSON.stringify` cannot encode.
fn js_to_json(value: &JsValue) -> Option<Value> {
    if value.is_undefined() {
        return None;
    }
    let raw = js_sys::JSON::stringify(value).ok()?.as_string()?;
    serde_json::from_str(&raw).ok()
}

fn json_to_js(value: &Value) -> JsValue {
    js_sys::JSON::parse(&value.to_string()).unwrap_or(JsValue::NULL)
}

/// Install the page manager, restore preferences, and wire Bootstrap widgets.
pub fn boot() {
    let config = ClientConfig::default();
    let page = WebPage::new(&config);
    let service = HttpTranslationService::new(config.base_url.clone());
    let manager = Rc::new(PreferenceManager::new(config, LocalStorage, service, page));
    MANAGER.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&manager)));

    manager.init_theme();
    bootstrap::init_tooltips();
    bootstrap::init_form_validation();
    wasm_bindgen_futures::spawn_local(async move {
        manager.init_language().await;
    });
}

#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> String {
    manager().map_or_else(String::new, |m| m.toggle_theme().as_str().to_owned())
}

#[wasm_bindgen(js_name = changeLanguage)]
pub fn change_language(language: String) {
    let Some(manager) = manager() else {
        return;
    };
    wasm_bindgen_futures::spawn_local(async move {
        manager.change_language(&language).await;
    });
}

#[wasm_bindgen(js_name = showAlert)]
pub fn show_alert_js(message: String, kind: Option<String>) {
    let kind = match kind.as_deref() {
        Some("success") => AlertKind::Success,
        Some("warning") => AlertKind::Warning,
        Some("danger") => AlertKind::Danger,
        _ => AlertKind::Info,
    };
    show_alert(&page_config(), &Alert::new(message, kind));
}

#[wasm_bindgen(js_name = filterTable)]
pub fn filter_table_js(table_id: String, term: String, column: Option<i32>) {
    use crate::util::table_filter::{column_from_index, filter_table};

    filter_table(&table_id, &term, column_from_index(column));
}

fn decimals_or(decimals: Option<u32>, default: usize) -> usize {
    decimals.and_then(|d| usize::try_from(d).ok()).unwrap_or(default)
}

/// Unparseable input is returned unchanged.
#[wasm_bindgen(js_name = formatDate)]
pub fn format_date_js(date: String, format: Option<String>) -> String {
    match parse_date(&date) {
        Some(value) => format_date_named(value, format.as_deref().unwrap_or("short")),
        None => date,
    }
}

#[wasm_bindgen(js_name = formatNumber)]
pub fn format_number_js(value: f64, decimals: Option<u32>) -> String {
    format_number(value, decimals_or(decimals, 2))
}

#[wasm_bindgen(js_name = formatPercentage)]
pub fn format_percentage_js(ratio: f64, decimals: Option<u32>) -> String {
    format_percentage(ratio, decimals_or(decimals, 1))
}

#[wasm_bindgen(js_name = validateEmail)]
pub fn validate_email_js(email: String) -> bool {
    validate::validate_email(&email)
}

#[wasm_bindgen(js_name = validatePhone)]
pub fn validate_phone_js(phone: String) -> bool {
    validate::validate_phone(&phone)
}

#[wasm_bindgen(js_name = validateAge)]
pub fn validate_age_js(age: String) -> bool {
    validate::validate_age(&age)
}

#[wasm_bindgen(js_name = validateHealthParameter)]
pub fn validate_health_parameter_js(value: String, min: Option<f64>, max: Option<f64>) -> bool {
    validate::validate_health_parameter(
        &value,
        min.unwrap_or(validate::HEALTH_PARAMETER_MIN),
        max.unwrap_or(validate::HEALTH_PARAMETER_MAX),
    )
}

#[wasm_bindgen(js_name = showLoading)]
pub fn show_loading_js(button: web_sys::HtmlButtonElement) {
    show_loading(&button);
}

#[wasm_bindgen(js_name = hideLoading)]
pub fn hide_loading_js(button: web_sys::HtmlButtonElement) {
    hide_loading(&button);
}

#[wasm_bindgen(js_name = showModal)]
pub fn show_modal_js(modal_id: String) {
    bootstrap::show_modal(&modal_id);
}

#[wasm_bindgen(js_name = hideModal)]
pub fn hide_modal_js(modal_id: String) {
    bootstrap::hide_modal(&modal_id);
}

/// `config` is a plain Chart.js configuration object.
#[wasm_bindgen(js_name = createChart)]
pub fn create_chart_js(canvas_id: String, config: JsValue) -> Option<bootstrap::Chart> {
    let config = js_to_json(&config)?;
    bootstrap::create_chart(&canvas_id, &config)
}

/// Resolves with the decoded JSON body. Rejects with `{ message }` after the
/// error alert is shown.
#[wasm_bindgen(js_name = apiCall)]
pub async fn api_call_js(url: String, options: JsValue) -> Result<JsValue, JsValue> {
    let options = js_to_json(&options);
    api_call_json(&page_config(), &url, options.as_ref())
        .await
        .map(|body| json_to_js(&body))
        .map_err(|err| json_to_js(&err.to_json()))
}

#[wasm_bindgen(js_name = saveToLocalStorage)]
pub fn save_to_local_storage_js(key: String, value: JsValue) {
    let Some(value) = js_to_json(&value) else {
        leptos::logging::error!("Error saving to localStorage: key={key} value is not JSON");
        return;
    };
    PreferenceStore::new(LocalStorage).save_json(&key, &value);
}

/// Returns `default_value` when the key is missing or does not hold JSON.
#[wasm_bindgen(js_name = loadFromLocalStorage)]
pub fn load_from_local_storage_js(key: String, default_value: JsValue) -> JsValue {
    PreferenceStore::new(LocalStorage)
        .load_json::<Option<Value>>(&key, None)
        .map_or(default_value, |value| json_to_js(&value))
}
