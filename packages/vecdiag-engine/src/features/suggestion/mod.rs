/// Transformation Suggestion Feature
///
/// Generates ranked, human-readable transformation proposals from dependency
/// findings and compiler issues.
///
/// ## Kinds (confidence)
/// - `learned_pattern` (0.95): a matching transform succeeded earlier in the session
/// - `loop_splitting` (0.9): write and read meet inside the iteration space
/// - `loop_distribution` (0.8): any conflicting dependency
/// - `alignment` (0.7): an issue mentions alignment
/// - `vector_width` (0.6): always
pub mod domain;
pub mod infrastructure;

pub use domain::*;
pub use infrastructure::*;
