//! Thin bindings to the page's Bootstrap and Chart.js globals.
//!
//! Both libraries are loaded by the server templates; these wrappers only
//! construct their widgets for marked elements.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Tooltip;

    #[wasm_bindgen(constructor, js_namespace = bootstrap)]
    fn new(element: &web_sys::Element) -> Tooltip;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Modal;

    #[wasm_bindgen(constructor, js_namespace = bootstrap)]
    fn new(element: &web_sys::Element) -> Modal;

    #[wasm_bindgen(static_method_of = Modal, js_namespace = bootstrap, js_name = getInstance)]
    fn get_instance(element: &web_sys::Element) -> Option<Modal>;

    #[wasm_bindgen(method)]
    fn show(this: &Modal);

    #[wasm_bindgen(method)]
    fn hide(this: &Modal);
}

#[wasm_bindgen]
extern "C" {
    /// A Chart.js chart instance.
    pub type Chart;

    #[wasm_bindgen(constructor)]
    fn new(canvas: &web_sys::Element, config: &JsValue) -> Chart;
}

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Attach a Bootstrap tooltip to every `[data-bs-toggle="tooltip"]` element.
pub fn init_tooltips() {
    let Some(doc) = document() else {
        return;
    };
    let Ok(list) = doc.query_selector_all(r#"[data-bs-toggle="tooltip"]"#) else {
        return;
    };
    for i in 0..list.length() {
        if let Some(el) = list.get(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
            let _ = Tooltip::new(&el);
        }
    }
}

/// Block submission of invalid `.needs-validation` forms and mark them validated.
pub fn init_form_validation() {
    let Some(doc) = document() else {
        return;
    };
    let Ok(list) = doc.query_selector_all(".needs-validation") else {
        return;
    };
    for i in 0..list.length() {
        let Some(form) = list.get(i).and_then(|n| n.dyn_into::<web_sys::HtmlFormElement>().ok()) else {
            continue;
        };
        let target = form.clone();
        let on_submit = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            if !target.check_validity() {
                event.prevent_default();
                event.stop_propagation();
            }
            let _ = target.class_list().add_1("was-validated");
        });
        let _ = form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref());
        on_submit.forget();
    }
}

pub fn show_modal(modal_id: &str) {
    if let Some(el) = document().and_then(|d| d.get_element_by_id(modal_id)) {
        Modal::new(&el).show();
    }
}

pub fn hide_modal(modal_id: &str) {
    if let Some(modal) = document()
        .and_then(|d| d.get_element_by_id(modal_id))
        .and_then(|el| Modal::get_instance(&el))
    {
        modal.hide();
    }
}

/// Create a Chart.js chart on the canvas `canvas_id` from a JSON config.
pub fn create_chart(canvas_id: &str, config: &serde_json::Value) -> Option<Chart> {
    let Some(canvas) = document().and_then(|d| d.get_element_by_id(canvas_id)) else {
        leptos::logging::error!("Canvas with id '{canvas_id}' not found");
        return None;
    };
    let config = match js_sys::JSON::parse(&config.to_string()) {
        Ok(config) => config,
        Err(err) => {
            leptos::logging::error!("invalid chart config for '{canvas_id}': {err:?}");
            return None;
        }
    };
    Some(Chart::new(&canvas, &config))
}
