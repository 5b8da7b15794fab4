/// Transformation suggestion models
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of transformation kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    /// Split the iteration space where write and read indices meet
    LoopSplitting,
    /// Separate reads, computation and writes into independent loops
    LoopDistribution,
    /// Transformation that worked before in the same session
    LearnedPattern,
    /// Alignment directives / data layout
    Alignment,
    /// Vector width pragmas
    VectorWidth,
}

impl SuggestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionKind::LoopSplitting => "loop_splitting",
            SuggestionKind::LoopDistribution => "loop_distribution",
            SuggestionKind::LearnedPattern => "learned_pattern",
            SuggestionKind::Alignment => "alignment",
            SuggestionKind::VectorWidth => "vector_width",
        }
    }
}

impl fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to a transformation recorded as successful in a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorTransform {
    pub transformation: SuggestionKind,
    pub code: String,
    /// Measured speedup, if one was recorded
    pub performance_gain: Option<f64>,
}

impl PriorTransform {
    /// Gain as rendered in reports, always with a fractional part
    pub fn gain_label(&self) -> String {
        self.performance_gain
            .map_or_else(|| "unknown".to_string(), |g| format!("{g:?}"))
    }
}

/// Ranked transformation proposal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub description: String,
    /// In [0, 1]
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<PriorTransform>,
    /// Directive or pragma strings to try
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,
}

impl Suggestion {
    pub fn new(kind: SuggestionKind, description: impl Into<String>, confidence: f64) -> Self {
        Self {
            kind,
            description: description.into(),
            confidence: confidence.clamp(0.0, 1.0),
            example: None,
            explanation: None,
            reference: None,
            hints: Vec::new(),
        }
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    pub fn with_reference(mut self, reference: PriorTransform) -> Self {
        self.reference = Some(reference);
        self
    }

    pub fn with_hints<I, S>(mut self, hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hints = hints.into_iter().map(Into::into).collect();
        self
    }
}
