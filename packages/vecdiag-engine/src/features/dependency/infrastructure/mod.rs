pub mod analyzer;

pub use analyzer::{calculate_overlap_point, indices_can_overlap, DependencyAnalyzer};
