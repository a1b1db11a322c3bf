//! Page-level event handlers: the generate and refine buttons.
//!
//! The same handlers back the exported `generate()` / `refine_plan()` entry
//! points, so markup may either call those from inline `onclick` attributes or
//! leave the wiring to [`setup_ui_event_handlers`].

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, MouseEvent};

use crate::constants::{
    GENERATE_BUTTON_ID, MSG_REFINE_UI_MISSING, REFINE_BUTTON_ID, REFINE_TEXT_ID,
};
use crate::dom_utils;
use crate::form::{build_request, DomForm, FormError, FormSource};
use crate::messages::Message;
use crate::state::dispatch_global_message;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Call once at start-up.  Buttons that already carry an inline `onclick`
/// are left alone so a click is not handled twice.
pub fn setup_ui_event_handlers(document: &Document) -> Result<(), JsValue> {
    bind_click(document, GENERATE_BUTTON_ID, on_generate)?;
    bind_click(document, REFINE_BUTTON_ID, on_refine)?;
    Ok(())
}

/// Read the form and start a generation run.
pub fn on_generate() {
    let document = match dom_utils::document() {
        Ok(d) => d,
        Err(e) => {
            crate::logging::error(&e.to_string());
            return;
        }
    };

    match build_request(&DomForm::new(&document)) {
        Ok(request) => dispatch_global_message(Message::GenerateRequested(request)),
        Err(FormError::MissingSelector) => {
            crate::logging::error(&FormError::MissingSelector.to_string())
        }
        Err(e @ FormError::NoPlannerType) => dom_utils::alert(&e.to_string()),
    }
}

/// Send the refine instruction; guards for missing UI and empty input live
/// here and in the reducer.
pub fn on_refine() {
    let document = match dom_utils::document() {
        Ok(d) => d,
        Err(e) => {
            crate::logging::error(&e.to_string());
            return;
        }
    };

    // `refineText` may be an <input> or a <textarea>.
    let text = DomForm::new(&document).value(REFINE_TEXT_ID);
    let button = document.get_element_by_id(REFINE_BUTTON_ID);

    match (text, button) {
        (Some(text), Some(_)) => dispatch_global_message(Message::RefineRequested(text)),
        _ => dom_utils::alert(MSG_REFINE_UI_MISSING),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn bind_click(document: &Document, id: &str, handler: fn()) -> Result<(), JsValue> {
    let Some(el) = document.get_element_by_id(id) else {
        crate::debug_log!("#{} not in markup, skipping click binding", id);
        return Ok(());
    };
    if el.has_attribute("onclick") {
        return Ok(());
    }

    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: MouseEvent| handler()));
    el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}
