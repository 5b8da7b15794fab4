/// Dependency Domain Models
pub mod dependency;

pub use dependency::*;
