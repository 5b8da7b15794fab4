/// Extraction Domain Models
pub mod models;

pub use models::*;
