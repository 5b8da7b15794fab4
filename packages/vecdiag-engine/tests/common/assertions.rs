//! Shared assertions

use vecdiag_engine::{CompilationStatus, Suggestion, SuggestionKind, VectorizationAnalysis};

/// Suggestions never increase in confidence
pub fn assert_ranked(suggestions: &[Suggestion]) {
    for pair in suggestions.windows(2) {
        assert!(
            pair[0].confidence >= pair[1].confidence,
            "{} ({}) ranked above {} ({})",
            pair[0].kind,
            pair[0].confidence,
            pair[1].kind,
            pair[1].confidence
        );
    }
}

/// Every reported dependency blocks vectorization
pub fn assert_all_conflicts(analysis: &VectorizationAnalysis) {
    for dep in &analysis.dependencies {
        assert!(dep.has_conflict(), "dependency without conflict: {dep:?}");
    }
}

pub fn assert_status_known(status: CompilationStatus) {
    assert!(CompilationStatus::ALL.contains(&status), "unknown status {status}");
}

pub fn kinds(analysis: &VectorizationAnalysis) -> Vec<SuggestionKind> {
    analysis.suggested_transformations.iter().map(|s| s.kind).collect()
}
