//! Client-side file downloads through a temporary object URL.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Trigger a browser download of `blob` named `filename`.
pub fn save_blob(blob: &Blob, filename: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("No body found"))?;

    let url = Url::create_object_url_with_blob(blob)?;

    let link: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    link.set_href(&url);
    link.set_download(filename);
    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;

    Url::revoke_object_url(&url)?;
    crate::debug_log!("Downloaded {} ({} bytes)", filename, blob.size());
    Ok(())
}

/// Wrap `contents` in a blob of type `mime` and download it.
pub fn save_text(contents: &str, mime: &str, filename: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let opts = BlobPropertyBag::new();
    opts.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &opts)?;
    save_blob(&blob, filename)
}
