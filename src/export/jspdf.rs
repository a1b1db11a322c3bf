//! Replays a [`PdfOp`] list on jsPDF (`window.jspdf.jsPDF`, UMD build).
//!
//! The library is loaded by the page, not bundled; when it is missing the
//! export fails with [`ClientError::PdfLibraryMissing`].

use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::pdf_layout::{layout_plan, PageGeometry, PdfOp};
use crate::constants::PDF_FILENAME;
use crate::error::ClientError;
use crate::models::Plan;

#[wasm_bindgen]
extern "C" {
    pub type JsPdf;

    #[wasm_bindgen(method, js_name = setFontSize)]
    fn set_font_size(this: &JsPdf, size: f64);

    #[wasm_bindgen(method, js_name = setFont)]
    fn set_font(this: &JsPdf, family: &str, style: &str);

    #[wasm_bindgen(method, js_name = setTextColor)]
    fn set_text_color(this: &JsPdf, r: u8, g: u8, b: u8);

    #[wasm_bindgen(method)]
    fn text(this: &JsPdf, text: &str, x: f64, y: f64);

    #[wasm_bindgen(method, js_name = addPage)]
    fn add_page(this: &JsPdf);

    #[wasm_bindgen(method)]
    fn save(this: &JsPdf, filename: &str);
}

#[derive(Serialize)]
struct JsPdfOptions {
    orientation: &'static str,
    unit: &'static str,
    format: &'static str,
}

fn new_document() -> Result<JsPdf, ClientError> {
    let window = web_sys::window().ok_or_else(|| ClientError::Js("no global window".into()))?;
    let namespace = Reflect::get(&window, &JsValue::from_str("jspdf"))?;
    if namespace.is_undefined() || namespace.is_null() {
        return Err(ClientError::PdfLibraryMissing);
    }
    let constructor: Function = Reflect::get(&namespace, &JsValue::from_str("jsPDF"))?
        .dyn_into()
        .map_err(|_| ClientError::PdfLibraryMissing)?;

    let options = serde_wasm_bindgen::to_value(&JsPdfOptions {
        orientation: "p",
        unit: "mm",
        format: "a4",
    })
    .map_err(|e| ClientError::Js(e.to_string()))?;

    let doc = Reflect::construct(&constructor, &Array::of1(&options))?;
    Ok(doc.unchecked_into::<JsPdf>())
}

fn draw(doc: &JsPdf, ops: &[PdfOp]) {
    for op in ops {
        match op {
            PdfOp::Text { text, x, y, style } => {
                doc.set_font("helvetica", if style.bold { "bold" } else { "normal" });
                doc.set_font_size(style.size);
                let (r, g, b) = style.color;
                doc.set_text_color(r, g, b);
                doc.text(text, *x, *y);
            }
            PdfOp::NewPage => doc.add_page(),
        }
    }
}

/// Build `curriculum.pdf` in the browser and hand it to the user.
pub fn export(plan: &Plan) -> Result<(), ClientError> {
    let doc = new_document()?;
    let ops = layout_plan(plan, &crate::utils::export_timestamp(), PageGeometry::default());
    crate::debug_log!("jsPDF export: {} ops", ops.len());
    draw(&doc, &ops);
    doc.save(PDF_FILENAME);
    Ok(())
}
