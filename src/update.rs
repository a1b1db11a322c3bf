// src/update.rs
//
// Pure reducer: state transitions plus the commands that carry out side
// effects.  No DOM or network access happens here.
//
use serde_json::Value;

use crate::constants::{
    MSG_EMPTY_INSTRUCTION, MSG_NO_PLAN_FOR_EXPORT, MSG_NO_PLAN_FOR_REFINE,
};
use crate::export::{json, PdfStrategy};
use crate::messages::{Command, Message};
use crate::models::{PlanError, StoredPlan};
use crate::state::{AppState, ResultView};

pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new();

    match msg {
        Message::GenerateRequested(request) => {
            state.stages.reset();
            state.result = ResultView::Loading;
            state.generating = true;
            commands.push(Command::RenderPipeline);
            commands.push(Command::RenderResult);
            commands.push(Command::RunGeneration(request));
        }

        Message::StageChanged { stage, status } => {
            state.stages.set(stage, status);
            commands.push(Command::RenderPipeline);
        }

        Message::PlanReceived(raw) => {
            state.generating = false;
            if show_plan(state, raw) {
                state.refine_visible = true;
                commands.push(Command::RenderRefineBox);
            }
            commands.push(Command::RenderResult);
        }

        Message::GenerateFailed(error) => {
            state.generating = false;
            state.result = ResultView::Failed(error);
            commands.push(Command::RenderResult);
        }

        Message::RefineRequested(instruction) => {
            let instruction = instruction.trim();
            if instruction.is_empty() {
                commands.push(Command::Alert(MSG_EMPTY_INSTRUCTION.to_string()));
            } else if let Some(stored) = &state.current_plan {
                state.refining = true;
                commands.push(Command::RenderRefineBox);
                commands.push(Command::RefinePlan {
                    instruction: instruction.to_string(),
                    current_plan: stored.raw.clone(),
                });
            } else {
                commands.push(Command::Alert(MSG_NO_PLAN_FOR_REFINE.to_string()));
            }
        }

        Message::RefineSucceeded(raw) => {
            state.refining = false;
            if show_plan(state, raw) {
                commands.push(Command::Toast("Plan refined".to_string()));
            }
            commands.push(Command::RenderRefineBox);
            commands.push(Command::RenderResult);
        }

        Message::RefineFailed(error) => {
            state.refining = false;
            commands.push(Command::RenderRefineBox);
            commands.push(Command::Alert(format!("Refinement failed: {}", error)));
        }

        Message::ExportJsonRequested => match &state.current_plan {
            Some(stored) => match json::to_export_string(&stored.raw) {
                Ok(contents) => commands.push(Command::DownloadJson { contents }),
                Err(e) => commands.push(Command::Alert(format!("JSON export failed: {}", e))),
            },
            None => commands.push(Command::Alert(MSG_NO_PLAN_FOR_EXPORT.to_string())),
        },

        Message::ExportPdfRequested(strategy) => match (&state.current_plan, strategy) {
            (None, _) => commands.push(Command::Alert(MSG_NO_PLAN_FOR_EXPORT.to_string())),
            // A server export is already in flight; the button is disabled,
            // this only guards double-dispatch.
            (Some(_), PdfStrategy::Server) if state.exporting_pdf => {}
            (Some(stored), PdfStrategy::Server) => {
                state.exporting_pdf = true;
                commands.push(Command::RenderExportButtons);
                commands.push(Command::ExportPdfViaServer {
                    curriculum: stored.raw.clone(),
                });
            }
            (Some(stored), PdfStrategy::Client) => {
                commands.push(Command::ExportPdfInBrowser {
                    plan: stored.plan.clone(),
                });
            }
        },

        Message::PdfExportFinished(outcome) => {
            state.exporting_pdf = false;
            commands.push(Command::RenderExportButtons);
            match outcome {
                Ok(()) => commands.push(Command::Toast("PDF downloaded".to_string())),
                Err(e) => commands.push(Command::Alert(format!("Error generating PDF: {}", e))),
            }
        }
    }

    commands
}

// Replace the stored plan with `raw`, or clear it when the response is not a
// plan.  Returns whether a plan is now rendered.
fn show_plan(state: &mut AppState, raw: Value) -> bool {
    for warning in crate::schema_validation::plan_warnings(&raw) {
        crate::logging::warn(&format!("Plan schema: {}", warning));
    }

    match StoredPlan::from_value(raw) {
        Ok(stored) => {
            crate::debug_log!(
                "Plan stored ({})",
                match stored.plan {
                    crate::models::Plan::Roadmap(_) => "roadmap",
                    crate::models::Plan::Semesters(_) => "semesters",
                }
            );
            state.current_plan = Some(stored);
            state.result = ResultView::Plan;
            true
        }
        Err(e) => {
            if let PlanError::Malformed(_) = e {
                crate::logging::error(&format!("Could not read plan: {}", e));
            } else {
                crate::logging::error("Unknown response format received");
            }
            state.current_plan = None;
            state.result = ResultView::UnknownFormat;
            false
        }
    }
}
