/// Diagnostic Classification Feature
///
/// Turns raw compiler output plus dependency findings into one
/// `CompilationStatus`.
///
/// ## Pipeline
/// 1. `extract_diagnostic_messages`: keep vectorization-relevant stderr lines
/// 2. `base_status`: derive a first status from the exit outcome
/// 3. `vectorization_issues`: keyword filter over the kept messages
/// 4. `DiagnosticClassifier::classify`: refine, dependency evidence first
pub mod domain;
pub mod infrastructure;

pub use domain::*;
pub use infrastructure::*;
