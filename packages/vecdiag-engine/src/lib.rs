/*
 * Vecdiag Engine - Loop Vectorization Diagnosis
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Results shared across features (VectorizationAnalysis)
 * - features/    : Vertical slices (extraction → dependency → diagnostics → suggestion)
 * - pipeline/    : Orchestration and report rendering
 * - config/      : YAML + env configuration
 *
 * The compiler is an external collaborator behind `CompilerPort`; every
 * compiler failure is reported as data, never as an error.
 */

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models
pub mod shared;

/// Feature modules
pub mod features;

/// Pipeline orchestration
pub mod pipeline;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{ConfigError, EngineConfig};
pub use errors::{Result, VecdiagError};
pub use features::compiler::{CompilationOutput, CompilerOutcome, CompilerPort, GccCompiler};
pub use features::dependency::{DependencyAnalyzer, DependencyInfo, DependencyType};
pub use features::diagnostics::{CompilationStatus, DiagnosticClassifier};
pub use features::extraction::{AccessExtractor, ArrayAccess, LoopExtractor, LoopInfo};
pub use features::session::{FailedAttempt, Session, SessionError, SessionStore, TransformRecord};
pub use features::suggestion::{PriorTransform, Suggestion, SuggestionEngine, SuggestionKind};
pub use pipeline::{render_json, render_text, AnalysisOrchestrator};
pub use shared::models::VectorizationAnalysis;

/// s1113-like loop used by the demo command
///
/// Write `a[i]` and read `a[LEN_1D/2 - i]` meet inside the iteration space.
pub const S1113_SAMPLE: &str = "
for (int i = 0; i < LEN_1D; i++) {
    a[i] = a[LEN_1D/2 - i] + b[i];
}
";
