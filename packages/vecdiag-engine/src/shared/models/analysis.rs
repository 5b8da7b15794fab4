//! Vectorization analysis result

use crate::features::dependency::DependencyInfo;
use crate::features::diagnostics::CompilationStatus;
use crate::features::suggestion::Suggestion;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of one analysis call
///
/// Immutable once assembled. The orchestrator hands it out as
/// `Arc<VectorizationAnalysis>` and the session history keeps clones of the
/// same `Arc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorizationAnalysis {
    pub status: CompilationStatus,
    pub original_code: String,
    pub dependencies: Vec<DependencyInfo>,
    /// Filtered compiler diagnostic lines
    pub compiler_messages: Vec<String>,
    /// Sorted by confidence, highest first
    pub suggested_transformations: Vec<Suggestion>,
    /// Never computed by the analyzer; reserved for recorded measurements
    pub performance_estimate: Option<f64>,
    pub analyzed_at: DateTime<Utc>,
}

impl VectorizationAnalysis {
    pub fn new(status: CompilationStatus, original_code: impl Into<String>) -> Self {
        Self {
            status,
            original_code: original_code.into(),
            dependencies: Vec::new(),
            compiler_messages: Vec::new(),
            suggested_transformations: Vec::new(),
            performance_estimate: None,
            analyzed_at: Utc::now(),
        }
    }

    pub fn with_dependencies(mut self, dependencies: Vec<DependencyInfo>) -> Self {
        self.dependencies = dependencies;
        self
    }

    pub fn with_messages(mut self, messages: Vec<String>) -> Self {
        self.compiler_messages = messages;
        self
    }

    pub fn with_suggestions(mut self, suggestions: Vec<Suggestion>) -> Self {
        self.suggested_transformations = suggestions;
        self
    }

    /// Highest-confidence suggestion
    pub fn top_suggestion(&self) -> Option<&Suggestion> {
        self.suggested_transformations.first()
    }

    /// Same analysis ignoring the timestamp
    pub fn same_result(&self, other: &Self) -> bool {
        self.status == other.status
            && self.original_code == other.original_code
            && self.dependencies == other.dependencies
            && self.compiler_messages == other.compiler_messages
            && self.suggested_transformations == other.suggested_transformations
            && self.performance_estimate == other.performance_estimate
    }
}
