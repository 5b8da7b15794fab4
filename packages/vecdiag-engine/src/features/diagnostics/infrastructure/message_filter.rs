//! Compiler message filtering
//!
//! Two passes over `-fopt-info` output: a pattern pass that keeps
//! vectorization-relevant lines, and a keyword pass that selects the issues
//! used for classification.

use crate::features::compiler::CompilerOutcome;
use crate::features::diagnostics::domain::CompilationStatus;
use once_cell::sync::Lazy;
use regex::Regex;

/// Phrases marking a vectorization-relevant diagnostic line
static DIAGNOSTIC_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)loop vectorized|not vectorized|data dependency|unsafe loop|iteration count|alignment|cost model|alias",
    )
    .expect("diagnostic line pattern is valid")
});

/// Lower-case keyword stems of vectorization issues
const ISSUE_KEYWORDS: &[&str] = &[
    "vectoriz",
    "dependenc",
    "alias",
    "alignment",
    "unsafe",
    "cost model",
    "iteration",
    "parallel",
];

/// Keep trimmed stderr lines that talk about vectorization
pub fn extract_diagnostic_messages(stderr: &str) -> Vec<String> {
    stderr
        .lines()
        .filter(|line| DIAGNOSTIC_LINE.is_match(line))
        .map(|line| line.trim().to_string())
        .collect()
}

/// Messages that name a concrete vectorization issue
pub fn vectorization_issues(messages: &[String]) -> Vec<String> {
    messages
        .iter()
        .filter(|msg| {
            let lower = msg.to_lowercase();
            ISSUE_KEYWORDS.iter().any(|kw| lower.contains(kw))
        })
        .cloned()
        .collect()
}

/// First status from the compiler's own outcome
///
/// A clean exit counts as success only when some message reports a
/// vectorized loop without a negation.
pub fn base_status(outcome: &CompilerOutcome, messages: &[String]) -> CompilationStatus {
    match outcome {
        CompilerOutcome::Exited { code: 0 } => {
            let vectorized = messages
                .iter()
                .any(|msg| msg.contains("vectorized") && !msg.contains("not"));
            if vectorized {
                CompilationStatus::Success
            } else {
                CompilationStatus::VectorizationFailed
            }
        }
        CompilerOutcome::TimedOut { .. } => CompilationStatus::Timeout,
        CompilerOutcome::Exited { .. } | CompilerOutcome::Unavailable { .. } => {
            CompilationStatus::UnknownError
        }
    }
}
