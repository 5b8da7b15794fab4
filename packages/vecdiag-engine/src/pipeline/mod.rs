//! Pipeline orchestration

pub mod orchestrator;
pub mod report;

pub use orchestrator::AnalysisOrchestrator;
pub use report::{render_json, render_text, TextReport};
