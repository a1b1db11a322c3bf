use wasm_bindgen::prelude::*;

#[macro_use]
mod macros;

pub mod constants;
pub mod error;
pub mod export;
pub mod form;
pub mod logging;
pub mod models;
pub mod network;
pub mod pipeline;
pub mod schema_validation;
pub mod utils;

mod command_executors;
mod components;
mod dom_utils;
mod messages;
mod state;
mod toast;
mod ui;
mod update;

pub use components::plan_view::render_plan_html;
pub use error::ClientError;
pub use models::{Plan, PlanRequest, StoredPlan};

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Better panic messages in the console
    console_error_panic_hook::set_once();

    network::init_api_config();

    let document = dom_utils::document()?;
    ui::events::setup_ui_event_handlers(&document)?;

    // Paint the idle pipeline and hide the refine box until a plan exists
    state::APP_STATE.with(|state| {
        let state = state.borrow();
        components::pipeline_timeline::render(&document, &state);
        components::refine_box::render(&document, &state);
    });

    debug_log!("Curriculum planner frontend started");
    Ok(())
}

/// `onclick="generate()"` entry point.
#[wasm_bindgen]
pub fn generate() {
    ui::events::on_generate();
}

/// `onclick="refine_plan()"` entry point.
#[wasm_bindgen]
pub fn refine_plan() {
    ui::events::on_refine();
}
