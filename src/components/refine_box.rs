//! The follow-up "refine plan" box under the result.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement};

use crate::constants::{
    REFINE_BUTTON_BUSY_LABEL, REFINE_BUTTON_ID, REFINE_BUTTON_LABEL, REFINE_CONTAINER_ID,
};
use crate::dom_utils;
use crate::state::AppState;

pub fn render(document: &Document, state: &AppState) {
    if let Some(container) = document.get_element_by_id(REFINE_CONTAINER_ID) {
        if state.refine_visible {
            dom_utils::show(&container);
        } else {
            dom_utils::hide(&container);
        }
    }

    if let Some(btn) = document
        .get_element_by_id(REFINE_BUTTON_ID)
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
    {
        dom_utils::set_busy(
            &btn,
            state.refining,
            REFINE_BUTTON_LABEL,
            REFINE_BUTTON_BUSY_LABEL,
        );
    }
}
