//! The three-stage "agent pipeline" indicator and the generate flow that
//! drives it.
//!
//! The animation is cosmetic: fixed delays around the real `/generate` call,
//! not tied to backend progress.

use gloo_timers::future::TimeoutFuture;

use crate::constants::{PLANNER_DELAY_MS, VALIDATOR_DELAY_MS};
use crate::messages::Message;
use crate::models::PlanRequest;
use crate::network::ApiClient;
use crate::state::dispatch_global_message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Planner,
    Generator,
    Validator,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Planner, Stage::Generator, Stage::Validator];

    /// Id of the timeline element in the markup.
    pub fn element_id(self) -> &'static str {
        match self {
            Stage::Planner => "planner",
            Stage::Generator => "generator",
            Stage::Validator => "validator",
        }
    }

    fn index(self) -> usize {
        match self {
            Stage::Planner => 0,
            Stage::Generator => 1,
            Stage::Validator => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StageStatus {
    #[default]
    Idle,
    Active,
    Done,
}

impl StageStatus {
    pub fn class_name(self) -> &'static str {
        match self {
            StageStatus::Idle => "agent-step",
            StageStatus::Active => "agent-step agent-active",
            StageStatus::Done => "agent-step agent-done",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineStages {
    statuses: [StageStatus; 3],
}

impl PipelineStages {
    pub fn get(&self, stage: Stage) -> StageStatus {
        self.statuses[stage.index()]
    }

    pub fn set(&mut self, stage: Stage, status: StageStatus) {
        self.statuses[stage.index()] = status;
    }

    pub fn reset(&mut self) {
        self.statuses = Default::default();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stage, StageStatus)> + '_ {
        Stage::ALL.iter().map(move |s| (*s, self.get(*s)))
    }
}

fn advance(stage: Stage, status: StageStatus) {
    dispatch_global_message(Message::StageChanged { stage, status });
}

/// planner → generator (real request) → validator, then hand the response
/// to the reducer.
pub async fn run_generation(request: PlanRequest) {
    advance(Stage::Planner, StageStatus::Active);
    TimeoutFuture::new(PLANNER_DELAY_MS).await;
    advance(Stage::Planner, StageStatus::Done);

    advance(Stage::Generator, StageStatus::Active);
    match ApiClient::generate(&request).await {
        Ok(plan) => {
            advance(Stage::Generator, StageStatus::Done);

            advance(Stage::Validator, StageStatus::Active);
            TimeoutFuture::new(VALIDATOR_DELAY_MS).await;
            advance(Stage::Validator, StageStatus::Done);

            dispatch_global_message(Message::PlanReceived(plan));
        }
        Err(e) => {
            crate::logging::error(&format!("Generate request failed: {}", e));
            dispatch_global_message(Message::GenerateFailed(e.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_start_idle_and_reset() {
        let mut stages = PipelineStages::default();
        assert!(stages.iter().all(|(_, s)| s == StageStatus::Idle));

        stages.set(Stage::Planner, StageStatus::Done);
        stages.set(Stage::Generator, StageStatus::Active);
        assert_eq!(stages.get(Stage::Planner), StageStatus::Done);
        assert_eq!(stages.get(Stage::Validator), StageStatus::Idle);

        stages.reset();
        assert_eq!(stages, PipelineStages::default());
    }

    #[test]
    fn class_names_match_stylesheet() {
        assert_eq!(StageStatus::Idle.class_name(), "agent-step");
        assert_eq!(StageStatus::Active.class_name(), "agent-step agent-active");
        assert_eq!(StageStatus::Done.class_name(), "agent-step agent-done");
        let ids: Vec<_> = Stage::ALL.iter().map(|s| s.element_id()).collect();
        assert_eq!(ids, ["planner", "generator", "validator"]);
    }
}
