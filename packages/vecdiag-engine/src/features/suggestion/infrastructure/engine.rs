//! Suggestion engine
//!
//! Ranks transformations that could make a loop vectorizable. Confidences are
//! fixed per kind; the session only contributes `learned_pattern` entries.

use super::examples::{distribution_example, split_example, LoopShape};
use crate::features::dependency::DependencyInfo;
use crate::features::extraction::LoopExtractor;
use crate::features::session::{previous_success, TransformRecord};
use crate::features::suggestion::domain::{PriorTransform, Suggestion, SuggestionKind};

pub const LEARNED_PATTERN_CONFIDENCE: f64 = 0.95;
pub const LOOP_SPLITTING_CONFIDENCE: f64 = 0.9;
pub const LOOP_DISTRIBUTION_CONFIDENCE: f64 = 0.8;
pub const ALIGNMENT_CONFIDENCE: f64 = 0.7;
pub const VECTOR_WIDTH_CONFIDENCE: f64 = 0.6;

pub const ALIGNMENT_DIRECTIVES: [&str; 2] = ["__attribute__((aligned(32)))", "#pragma GCC aligned"];
pub const VECTOR_WIDTH_PRAGMAS: [&str; 3] =
    ["#pragma GCC ivdep", "#pragma omp simd", "#pragma vector always"];

/// Suggestion engine
#[derive(Debug, Default, Clone, Copy)]
pub struct SuggestionEngine;

impl SuggestionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Ranked suggestions for one analysis
    ///
    /// `prior` is the session's successful transforms, `None` outside a
    /// session. The result is sorted by confidence (highest first) and ties
    /// keep generation order.
    pub fn suggest(
        &self,
        source: &str,
        dependencies: &[DependencyInfo],
        issues: &[String],
        prior: Option<&[TransformRecord]>,
    ) -> Vec<Suggestion> {
        let loops = LoopExtractor::extract_all(source);
        let shape = LoopShape::of(&loops);
        let mut suggestions = Vec::new();

        for dep in dependencies.iter().filter(|d| d.has_conflict()) {
            if dep.is_index_overlap() {
                suggestions.push(Self::loop_splitting(&shape, dep));
            }

            suggestions.push(
                Suggestion::new(
                    SuggestionKind::LoopDistribution,
                    format!("Distribute loop to separate {} updates", dep.variable),
                    LOOP_DISTRIBUTION_CONFIDENCE,
                )
                .with_example(distribution_example(&shape, dep)),
            );

            let learned = prior.and_then(|records| previous_success(records, &dep.variable));
            if let Some(record) = learned {
                suggestions.push(Self::learned_pattern(record));
            }
        }

        if issues.iter().any(|i| i.to_lowercase().contains("alignment")) {
            suggestions.push(
                Suggestion::new(
                    SuggestionKind::Alignment,
                    "Add alignment directives or adjust data layout",
                    ALIGNMENT_CONFIDENCE,
                )
                .with_hints(ALIGNMENT_DIRECTIVES),
            );
        }

        suggestions.push(
            Suggestion::new(
                SuggestionKind::VectorWidth,
                "Try explicit vector width hints",
                VECTOR_WIDTH_CONFIDENCE,
            )
            .with_hints(VECTOR_WIDTH_PRAGMAS),
        );

        // Stable: equal confidences keep generation order
        suggestions.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

        tracing::debug!(
            count = suggestions.len(),
            conflicts = dependencies.iter().filter(|d| d.has_conflict()).count(),
            "suggestions generated"
        );

        suggestions
    }

    fn loop_splitting(shape: &LoopShape<'_>, dep: &DependencyInfo) -> Suggestion {
        let distance = dep
            .distance
            .map_or_else(|| "unknown".to_string(), |d| d.to_string());
        let pattern = dep.conflict_description.as_deref().unwrap_or_default();

        Suggestion::new(
            SuggestionKind::LoopSplitting,
            format!(
                "Split loop at iteration {distance} to avoid {} dependency overlap",
                dep.variable
            ),
            LOOP_SPLITTING_CONFIDENCE,
        )
        .with_example(split_example(shape, dep))
        .with_explanation(format!(
            "The access pattern {pattern} causes iterations to interfere"
        ))
    }

    fn learned_pattern(record: &TransformRecord) -> Suggestion {
        Suggestion::new(
            SuggestionKind::LearnedPattern,
            "Previously successful transformation for similar dependency",
            LEARNED_PATTERN_CONFIDENCE,
        )
        .with_reference(PriorTransform {
            transformation: record.transform_type,
            code: record.code.clone(),
            performance_gain: record.performance_gain,
        })
    }
}
