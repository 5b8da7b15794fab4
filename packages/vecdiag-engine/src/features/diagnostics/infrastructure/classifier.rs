//! Diagnostic classifier
//!
//! Refines a base status into the most specific failure. Dependency evidence
//! outranks textual compiler hints.

use crate::features::dependency::DependencyInfo;
use crate::features::diagnostics::domain::CompilationStatus;

/// Diagnostic classifier
#[derive(Debug, Default, Clone, Copy)]
pub struct DiagnosticClassifier;

impl DiagnosticClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Most specific status for the analysis
    ///
    /// Rules, first match wins:
    /// 1. `success` and `timeout` pass through
    /// 2. any conflicting dependency → `dependency_conflict`
    /// 3. an issue mentioning alignment → `alignment_issue`
    /// 4. an issue mentioning unsafe or alias → `unsafe_memory_access`
    /// 5. an issue mentioning complex → `loop_complexity`
    /// 6. otherwise → `vectorization_failed`
    pub fn classify(
        &self,
        base: CompilationStatus,
        dependencies: &[DependencyInfo],
        issues: &[String],
    ) -> CompilationStatus {
        if matches!(base, CompilationStatus::Success | CompilationStatus::Timeout) {
            return base;
        }

        if dependencies.iter().any(DependencyInfo::has_conflict) {
            return CompilationStatus::DependencyConflict;
        }

        let lowered: Vec<String> = issues.iter().map(|i| i.to_lowercase()).collect();
        let any_mentions = |needles: &[&str]| {
            lowered
                .iter()
                .any(|issue| needles.iter().any(|n| issue.contains(n)))
        };

        if any_mentions(&["alignment"]) {
            CompilationStatus::AlignmentIssue
        } else if any_mentions(&["unsafe", "alias"]) {
            CompilationStatus::UnsafeMemoryAccess
        } else if any_mentions(&["complex"]) {
            CompilationStatus::LoopComplexity
        } else {
            CompilationStatus::VectorizationFailed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conflict() -> DependencyInfo {
        DependencyInfo::loop_carried_conflict(
            "a",
            "i",
            "i-1",
            1,
            "Write to a[i] conflicts with read from a[i-1] at iteration 1",
        )
    }

    fn issues(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_success_passes_through() {
        let classifier = DiagnosticClassifier::new();
        let status = classifier.classify(
            CompilationStatus::Success,
            &[conflict()],
            &issues(&["alignment"]),
        );
        assert_eq!(status, CompilationStatus::Success);
    }

    #[test]
    fn test_timeout_passes_through() {
        let classifier = DiagnosticClassifier::new();
        let status = classifier.classify(CompilationStatus::Timeout, &[conflict()], &[]);
        assert_eq!(status, CompilationStatus::Timeout);
    }

    #[test]
    fn test_dependency_outranks_text() {
        let classifier = DiagnosticClassifier::new();
        let status = classifier.classify(
            CompilationStatus::UnknownError,
            &[conflict()],
            &issues(&["Alignment of access forced using peeling"]),
        );
        assert_eq!(status, CompilationStatus::DependencyConflict);
    }

    #[test]
    fn test_non_conflicting_dependency_is_ignored() {
        let classifier = DiagnosticClassifier::new();
        let mut dep = conflict();
        dep.loop_carried = false;

        let status = classifier.classify(CompilationStatus::VectorizationFailed, &[dep], &[]);
        assert_eq!(status, CompilationStatus::VectorizationFailed);
    }

    #[test]
    fn test_textual_priority_order() {
        let classifier = DiagnosticClassifier::new();
        let base = CompilationStatus::VectorizationFailed;

        assert_eq!(
            classifier.classify(base, &[], &issues(&["possible ALIAS", "misalignment"])),
            CompilationStatus::AlignmentIssue
        );
        assert_eq!(
            classifier.classify(base, &[], &issues(&["complex access", "unsafe loop"])),
            CompilationStatus::UnsafeMemoryAccess
        );
        assert_eq!(
            classifier.classify(base, &[], &issues(&["control flow too complex"])),
            CompilationStatus::LoopComplexity
        );
        assert_eq!(
            classifier.classify(base, &[], &issues(&["cost model: not profitable"])),
            CompilationStatus::VectorizationFailed
        );
    }

    #[test]
    fn test_unknown_error_is_refined() {
        let classifier = DiagnosticClassifier::new();
        assert_eq!(
            classifier.classify(CompilationStatus::UnknownError, &[], &[]),
            CompilationStatus::VectorizationFailed
        );
    }
}
