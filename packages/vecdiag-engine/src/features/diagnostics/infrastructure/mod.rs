pub mod classifier;
pub mod message_filter;

pub use classifier::DiagnosticClassifier;
pub use message_filter::{base_status, extract_diagnostic_messages, vectorization_issues};
