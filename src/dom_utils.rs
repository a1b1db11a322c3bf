//! dom_utils.rs – thin helpers for the show / hide / busy patterns repeated
//! across components.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement};

use crate::error::ClientError;

/// The page document, or `ClientError::Js` outside a browser window.
pub fn document() -> Result<Document, ClientError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ClientError::Js("no global document".into()))
}

/// Look up an element by id, failing with `MissingElement`.
pub fn require(document: &Document, id: &str) -> Result<Element, ClientError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| ClientError::MissingElement(id.to_string()))
}

fn set_display(el: &Element, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property("display", value);
    }
}

pub fn show(el: &Element) {
    set_display(el, "block");
}

pub fn hide(el: &Element) {
    set_display(el, "none");
}

/// Disable `btn` and swap its label while an action is in flight.
pub fn set_busy(btn: &HtmlButtonElement, busy: bool, idle_label: &str, busy_label: &str) {
    btn.set_disabled(busy);
    btn.set_text_content(Some(if busy { busy_label } else { idle_label }));
}

/// Blocking `window.alert`.  Falls back to the console when there is no
/// window.
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if window.alert_with_message(message).is_err() {
                crate::logging::warn(message);
            }
        }
        None => crate::logging::warn(message),
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fresh(doc: &Document, tag: &str, id: &str) -> Element {
        let el = doc.create_element(tag).unwrap();
        el.set_id(id);
        doc.body().unwrap().append_child(&el).unwrap();
        el
    }

    #[wasm_bindgen_test]
    fn show_and_hide_toggle_display() {
        let doc = document().unwrap();
        let el = fresh(&doc, "div", "dom-utils-box");
        hide(&el);
        let style = el.dyn_ref::<HtmlElement>().unwrap().style();
        assert_eq!(style.get_property_value("display").unwrap(), "none");
        show(&el);
        assert_eq!(style.get_property_value("display").unwrap(), "block");
        el.remove();
    }

    #[wasm_bindgen_test]
    fn busy_button_is_disabled_and_relabelled() {
        let doc = document().unwrap();
        let btn: HtmlButtonElement = fresh(&doc, "button", "dom-utils-btn").dyn_into().unwrap();
        set_busy(&btn, true, "Refine Curriculum", "Refining...");
        assert!(btn.disabled());
        assert_eq!(btn.text_content().unwrap(), "Refining...");
        set_busy(&btn, false, "Refine Curriculum", "Refining...");
        assert!(!btn.disabled());
        assert_eq!(btn.text_content().unwrap(), "Refine Curriculum");
        btn.remove();
    }

    #[wasm_bindgen_test]
    fn require_reports_missing_id() {
        let doc = document().unwrap();
        let err = require(&doc, "definitely-not-here").unwrap_err();
        assert_eq!(err.to_string(), "element #definitely-not-here not found");
    }

    #[wasm_bindgen_test]
    fn mounting_a_plan_adds_download_bar_and_content() {
        let doc = document().unwrap();
        let result = fresh(&doc, "div", "result");
        let mut state = crate::state::AppState::new();
        state.result = crate::state::ResultView::Plan;
        state.current_plan = Some(
            crate::models::StoredPlan::from_value(serde_json::json!({
                "semesters": [{"semester": 1, "courses": [{"title": "Intro"}]}]
            }))
            .unwrap(),
        );

        crate::components::plan_view::mount(&doc, &state).unwrap();
        assert!(result.query_selector(".download-bar").unwrap().is_some());
        assert!(doc.get_element_by_id("downloadPdfBtn").is_some());
        assert!(result.inner_html().contains("Intro"));
        result.remove();
    }

    #[wasm_bindgen_test]
    fn mounting_without_result_container_fails() {
        let doc = document().unwrap();
        if let Some(existing) = doc.get_element_by_id("result") {
            existing.remove();
        }
        let state = crate::state::AppState::new();
        let err = crate::components::plan_view::mount(&doc, &state).unwrap_err();
        assert!(matches!(err, ClientError::MissingElement(ref id) if id == "result"));
    }
}
