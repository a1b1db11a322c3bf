// src/state.rs
//
// Held UI state.  One `AppState` per page, owned by a thread-local and only
// mutated through `update()`.
//
use std::cell::RefCell;

use crate::messages::{Command, Message};
use crate::models::StoredPlan;
use crate::pipeline::PipelineStages;
use crate::update::update;

/// What the `#result` container currently shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ResultView {
    #[default]
    Empty,
    Loading,
    /// `current_plan` is rendered.
    Plan,
    UnknownFormat,
    Failed(String),
}

#[derive(Debug, Default)]
pub struct AppState {
    pub stages: PipelineStages,
    pub result: ResultView,
    /// The most recently rendered plan; export and refine read it.
    pub current_plan: Option<StoredPlan>,
    pub refine_visible: bool,
    pub generating: bool,
    pub refining: bool,
    pub exporting_pdf: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, msg: Message) -> Vec<Command> {
        update(self, msg)
    }
}

thread_local! {
    pub static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
}

/// Apply `msg` to the global state, then run the resulting commands once the
/// borrow has been released (executors read the state again to render).
pub fn dispatch_global_message(msg: Message) {
    let commands = APP_STATE.with(|state| crate::mut_borrow!(state).dispatch(msg));
    for cmd in commands {
        crate::command_executors::execute(cmd);
    }
}
