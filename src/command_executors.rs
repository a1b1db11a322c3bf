//! Side effects requested by `update()`.
//!
//! Executors run after the state borrow has been released, so they may read
//! `APP_STATE` again (renders) or dispatch follow-up messages (async flows).

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement};

use crate::components::{download_bar, pipeline_timeline, plan_view, refine_box};
use crate::constants::{GENERATE_BUTTON_ID, MSG_REFINE_FALLBACK, PDF_FILENAME};
use crate::dom_utils;
use crate::error::ClientError;
use crate::export::{download, json, jspdf};
use crate::messages::{Command, Message};
use crate::network::ApiClient;
use crate::state::{dispatch_global_message, AppState, APP_STATE};

pub fn execute(cmd: Command) {
    match cmd {
        Command::RunGeneration(request) => {
            wasm_bindgen_futures::spawn_local(crate::pipeline::run_generation(request));
        }

        Command::RefinePlan {
            instruction,
            current_plan,
        } => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::refine_plan(&instruction, &current_plan).await {
                    Ok(plan) => dispatch_global_message(Message::RefineSucceeded(plan)),
                    Err(e) => {
                        crate::logging::error(&format!("Refine request failed: {}", e));
                        dispatch_global_message(Message::RefineFailed(refine_error_text(&e)));
                    }
                }
            });
        }

        Command::DownloadJson { contents } => {
            if let Err(e) = json::download(&contents) {
                crate::logging::error(&format!("JSON download failed: {:?}", e));
            }
        }

        Command::ExportPdfViaServer { curriculum } => {
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = match ApiClient::export_pdf(&curriculum).await {
                    Ok(blob) => download::save_blob(&blob, PDF_FILENAME)
                        .map_err(|e| ClientError::from(e).to_string()),
                    Err(e) => Err(e.to_string()),
                };
                if let Err(e) = &outcome {
                    crate::logging::error(&format!("PDF export failed: {}", e));
                }
                dispatch_global_message(Message::PdfExportFinished(outcome));
            });
        }

        Command::ExportPdfInBrowser { plan } => match jspdf::export(&plan) {
            Ok(()) => crate::toast::success("PDF downloaded"),
            Err(ClientError::PdfLibraryMissing) => {
                dom_utils::alert(&ClientError::PdfLibraryMissing.to_string())
            }
            Err(e) => {
                crate::logging::error(&format!("jsPDF export failed: {}", e));
                dom_utils::alert(&format!("Error generating PDF: {}", e));
            }
        },

        Command::Alert(message) => dom_utils::alert(&message),

        Command::Toast(message) => crate::toast::success(&message),

        Command::RenderPipeline => with_document(|document, state| {
            pipeline_timeline::render(document, state);
            sync_generate_button(document, state);
        }),

        Command::RenderResult => with_document(|document, state| {
            if let Err(e) = plan_view::mount(document, state) {
                crate::logging::error(&format!("Failed to render result: {}", e));
            }
            sync_generate_button(document, state);
        }),

        Command::RenderRefineBox => with_document(refine_box::render),

        Command::RenderExportButtons => with_document(|document, state| {
            download_bar::sync_pdf_button(document, state.exporting_pdf)
        }),
    }
}

/// Message shown after "Refinement failed: ".  Prefers the backend's
/// response body.
pub fn refine_error_text(error: &ClientError) -> String {
    match error {
        ClientError::Http { .. } => error
            .response_body()
            .unwrap_or(MSG_REFINE_FALLBACK)
            .to_string(),
        other => other.to_string(),
    }
}

fn with_document(render: impl FnOnce(&Document, &AppState)) {
    let document = match dom_utils::document() {
        Ok(d) => d,
        Err(e) => {
            crate::logging::error(&e.to_string());
            return;
        }
    };
    APP_STATE.with(|state| render(&document, &state.borrow()));
}

fn sync_generate_button(document: &Document, state: &AppState) {
    if let Some(btn) = document
        .get_element_by_id(GENERATE_BUTTON_ID)
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
    {
        btn.set_disabled(state.generating);
    }
}
