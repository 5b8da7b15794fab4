/// Session models
use crate::features::dependency::DependencyType;
use crate::features::suggestion::SuggestionKind;
use crate::shared::models::VectorizationAnalysis;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Transformation that worked for a dependency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformRecord {
    pub dependency_type: DependencyType,
    /// Array the dependency was on
    pub variable: String,
    pub transform_type: SuggestionKind,
    /// Example of the transformed code
    pub code: String,
    pub performance_gain: Option<f64>,
    pub recorded_at: DateTime<Utc>,
}

impl TransformRecord {
    pub fn new(
        dependency_type: DependencyType,
        variable: impl Into<String>,
        transform_type: SuggestionKind,
        code: impl Into<String>,
    ) -> Self {
        Self {
            dependency_type,
            variable: variable.into(),
            transform_type,
            code: code.into(),
            performance_gain: None,
            recorded_at: Utc::now(),
        }
    }

    pub fn with_gain(mut self, gain: f64) -> Self {
        self.performance_gain = Some(gain);
        self
    }

    /// Whether this record applies to a loop-carried dependency on `variable`
    pub fn matches_loop_carried(&self, variable: &str) -> bool {
        self.dependency_type == DependencyType::LoopCarried && self.variable == variable
    }
}

/// First successful loop-carried transform recorded for `variable`
pub fn previous_success<'a>(
    records: &'a [TransformRecord],
    variable: &str,
) -> Option<&'a TransformRecord> {
    records.iter().find(|t| t.matches_loop_carried(variable))
}

/// Transformation that did not help
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedAttempt {
    pub variable: String,
    pub transform_type: SuggestionKind,
    pub code: String,
    pub reason: String,
    pub recorded_at: DateTime<Utc>,
}

impl FailedAttempt {
    pub fn new(
        variable: impl Into<String>,
        transform_type: SuggestionKind,
        code: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            variable: variable.into(),
            transform_type,
            code: code.into(),
            reason: reason.into(),
            recorded_at: Utc::now(),
        }
    }
}

/// Compilation session
///
/// All lists are append-only.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub history: Vec<Arc<VectorizationAnalysis>>,
    pub learned_patterns: HashMap<String, serde_json::Value>,
    pub successful_transforms: Vec<TransformRecord>,
    pub failed_attempts: Vec<FailedAttempt>,
}

impl Session {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created_at: Utc::now(),
            history: Vec::new(),
            learned_patterns: HashMap::new(),
            successful_transforms: Vec::new(),
            failed_attempts: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
            && self.learned_patterns.is_empty()
            && self.successful_transforms.is_empty()
            && self.failed_attempts.is_empty()
    }
}
