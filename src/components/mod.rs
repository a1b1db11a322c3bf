pub mod download_bar;
pub mod pipeline_timeline;
pub mod plan_view;
pub mod refine_box;
