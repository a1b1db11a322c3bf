//! Paints the planner / generator / validator indicator from state.

use web_sys::Document;

use crate::pipeline::Stage;
use crate::state::AppState;

/// Class list for a stage's timeline element.
pub fn stage_class(state: &AppState, stage: Stage) -> &'static str {
    state.stages.get(stage).class_name()
}

pub fn render(document: &Document, state: &AppState) {
    for stage in Stage::ALL {
        match document.get_element_by_id(stage.element_id()) {
            Some(el) => el.set_class_name(stage_class(state, stage)),
            None => crate::debug_log!("pipeline element #{} missing", stage.element_id()),
        }
    }
}
