/// Suggestion Domain Models
pub mod suggestion;

pub use suggestion::*;
