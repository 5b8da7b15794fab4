//! Shared models

pub mod analysis;

pub use analysis::VectorizationAnalysis;
