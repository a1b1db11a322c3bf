// src/messages.rs
//
// The events that can occur in the UI, and the side effects the reducer asks
// for in response.
//
use serde_json::Value;

use crate::export::PdfStrategy;
use crate::models::{Plan, PlanRequest};
use crate::pipeline::{Stage, StageStatus};

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Generate flow
    GenerateRequested(PlanRequest),
    StageChanged { stage: Stage, status: StageStatus },
    PlanReceived(Value),
    GenerateFailed(String),

    // Refine loop
    RefineRequested(String), // raw instruction text
    RefineSucceeded(Value),
    RefineFailed(String),

    // Export
    ExportJsonRequested,
    ExportPdfRequested(PdfStrategy),
    PdfExportFinished(Result<(), String>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Animate the pipeline and POST `/generate`
    RunGeneration(PlanRequest),

    /// POST `/refine-plan` with the stored plan
    RefinePlan {
        instruction: String,
        current_plan: Value,
    },

    /// Download `contents` as `curriculum.json`
    DownloadJson { contents: String },

    /// POST `/export-pdf` and download the blob
    ExportPdfViaServer { curriculum: Value },

    /// Lay out and draw the PDF with jsPDF
    ExportPdfInBrowser { plan: Plan },

    /// Blocking browser alert
    Alert(String),

    /// Non-blocking notification
    Toast(String),

    // Re-render parts of the page from the current state
    RenderPipeline,
    RenderResult,
    RenderRefineBox,
    RenderExportButtons,
}
