/// Compilation status taxonomy
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one vectorization analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompilationStatus {
    // Success cases
    Success,
    SuccessWithWarnings,

    // Vectorization-specific failures
    /// Generic vectorization failure
    VectorizationFailed,
    /// Blocked by a loop-carried dependency
    DependencyConflict,
    AlignmentIssue,
    /// Loop too complex for the vectorizer
    LoopComplexity,
    /// Possible pointer aliasing
    UnsafeMemoryAccess,

    // Other failures
    SyntaxError,
    LinkerError,
    Timeout,
    UnknownError,
}

impl CompilationStatus {
    pub const ALL: [CompilationStatus; 11] = [
        CompilationStatus::Success,
        CompilationStatus::SuccessWithWarnings,
        CompilationStatus::VectorizationFailed,
        CompilationStatus::DependencyConflict,
        CompilationStatus::AlignmentIssue,
        CompilationStatus::LoopComplexity,
        CompilationStatus::UnsafeMemoryAccess,
        CompilationStatus::SyntaxError,
        CompilationStatus::LinkerError,
        CompilationStatus::Timeout,
        CompilationStatus::UnknownError,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompilationStatus::Success => "success",
            CompilationStatus::SuccessWithWarnings => "success_with_warnings",
            CompilationStatus::VectorizationFailed => "vectorization_failed",
            CompilationStatus::DependencyConflict => "dependency_conflict",
            CompilationStatus::AlignmentIssue => "alignment_issue",
            CompilationStatus::LoopComplexity => "loop_complexity",
            CompilationStatus::UnsafeMemoryAccess => "unsafe_memory_access",
            CompilationStatus::SyntaxError => "syntax_error",
            CompilationStatus::LinkerError => "linker_error",
            CompilationStatus::Timeout => "timeout",
            CompilationStatus::UnknownError => "unknown_error",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(
            self,
            CompilationStatus::Success | CompilationStatus::SuccessWithWarnings
        )
    }
}

impl fmt::Display for CompilationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
