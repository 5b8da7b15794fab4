/// Session Domain Models
pub mod session;

pub use session::*;
