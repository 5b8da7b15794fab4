/// Compilation Session Feature
///
/// Per-session history of analyses, learned patterns and transform outcomes.
///
/// ## Concurrency
/// `DashMap` keyed by session id, one `parking_lot::Mutex` per session:
/// writers to the same session are serialized, distinct sessions are
/// independent.
pub mod domain;
pub mod infrastructure;

pub use domain::*;
pub use infrastructure::*;
