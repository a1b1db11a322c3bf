//! Small toast notifications for non-blocking success notices.
//! Creates a `#toast-root` container once per page and appends toast divs that
//! remove themselves after a few seconds.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element};

const TOAST_ROOT_ID: &str = "toast-root";
const TOAST_STYLES_ID: &str = "toast-styles";
const TOAST_LIFETIME_MS: i32 = 4000;

const SUCCESS_CLASS: &str = "toast toast-success";

pub fn success(message: &str) {
    if let Err(e) = try_show(message, SUCCESS_CLASS) {
        crate::logging::warn(&format!("toast failed: {:?}", e));
    }
}

fn try_show(message: &str, class_name: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    ensure_styles(&document)?;
    let root = ensure_root(&document)?;

    let toast = document.create_element("div")?;
    toast.set_class_name(class_name);
    toast.set_text_content(Some(message));
    // newest on top
    root.prepend_with_node_1(&toast)?;

    let cb = Closure::once_into_js(move || toast.remove());
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.unchecked_ref(),
        TOAST_LIFETIME_MS,
    )?;
    Ok(())
}

fn ensure_root(document: &Document) -> Result<Element, JsValue> {
    if let Some(el) = document.get_element_by_id(TOAST_ROOT_ID) {
        return Ok(el);
    }
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;
    let root = document.create_element("div")?;
    root.set_id(TOAST_ROOT_ID);
    root.set_class_name("toast-root");
    body.append_child(&root)?;
    Ok(root)
}

fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(TOAST_STYLES_ID).is_some() {
        return Ok(());
    }

    let css = "
.toast-root{position:fixed;top:16px;right:16px;display:flex;flex-direction:column;gap:8px;z-index:9999;font-family:Arial,Helvetica,sans-serif}
.toast{padding:10px 16px;border-radius:4px;color:#fff;box-shadow:0 2px 4px rgba(0,0,0,.1);opacity:0;animation:toast-in .2s forwards}
.toast-success{background:#16a34a}
@keyframes toast-in{to{opacity:1}}
";

    let style = document.create_element("style")?;
    style.set_id(TOAST_STYLES_ID);
    style.set_text_content(Some(css));
    match document.query_selector("head")? {
        Some(head) => head.append_child(&style)?,
        None => document
            .body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .append_child(&style)?,
    };
    Ok(())
}
