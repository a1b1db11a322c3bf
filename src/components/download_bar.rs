//! JSON / PDF export buttons attached above a rendered plan.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlButtonElement};

use crate::constants::{JSON_BUTTON_LABEL, PDF_BUTTON_BUSY_LABEL, PDF_BUTTON_LABEL};
use crate::messages::Message;
use crate::network::current_config;
use crate::state::dispatch_global_message;

pub const PDF_BUTTON_ID: &str = "downloadPdfBtn";
pub const JSON_BUTTON_ID: &str = "downloadJsonBtn";

fn button(
    document: &Document,
    id: &str,
    label: &str,
    on_click: impl FnMut() + 'static,
) -> Result<HtmlButtonElement, JsValue> {
    let btn: HtmlButtonElement = document.create_element("button")?.dyn_into()?;
    btn.set_id(id);
    btn.set_class_name("download-btn");
    btn.set_text_content(Some(label));

    let cb = Closure::wrap(Box::new(on_click) as Box<dyn FnMut()>);
    btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(btn)
}

/// Build a fresh bar.  `exporting_pdf` sets the initial PDF button state.
pub fn build(document: &Document, exporting_pdf: bool) -> Result<Element, JsValue> {
    let bar = document.create_element("div")?;
    bar.set_class_name("download-bar");

    let json = button(document, JSON_BUTTON_ID, JSON_BUTTON_LABEL, || {
        dispatch_global_message(Message::ExportJsonRequested);
    })?;
    let pdf = button(document, PDF_BUTTON_ID, PDF_BUTTON_LABEL, || {
        // Read the strategy at click time so `init_config_js` after start-up
        // still applies.
        dispatch_global_message(Message::ExportPdfRequested(current_config().pdf_strategy()));
    })?;
    apply_pdf_state(&pdf, exporting_pdf);

    bar.append_child(&json)?;
    bar.append_child(&pdf)?;
    Ok(bar)
}

fn apply_pdf_state(btn: &HtmlButtonElement, busy: bool) {
    crate::dom_utils::set_busy(btn, busy, PDF_BUTTON_LABEL, PDF_BUTTON_BUSY_LABEL);
}

/// Update the PDF button of the mounted bar, if any.
pub fn sync_pdf_button(document: &Document, busy: bool) {
    if let Some(btn) = document
        .get_element_by_id(PDF_BUTTON_ID)
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
    {
        apply_pdf_state(&btn, busy);
    }
}
