//! Report rendering
//!
//! Text layout is line-oriented and stable; agents parse it. JSON is the
//! serde form of the whole analysis.

use crate::config::ReportConfig;
use crate::shared::models::VectorizationAnalysis;
use std::fmt;

/// Text view of an analysis, truncated per `ReportConfig`
pub struct TextReport<'a> {
    analysis: &'a VectorizationAnalysis,
    config: &'a ReportConfig,
}

impl<'a> TextReport<'a> {
    pub fn new(analysis: &'a VectorizationAnalysis, config: &'a ReportConfig) -> Self {
        Self { analysis, config }
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let analysis = self.analysis;

        write!(f, "Vectorization Analysis for provided code:\n\n")?;
        write!(f, "Status: {}\n\n", analysis.status)?;

        if !analysis.dependencies.is_empty() {
            writeln!(f, "Detected Dependencies:")?;
            for dep in &analysis.dependencies {
                write!(f, "  - {}: ", dep.variable)?;
                if dep.loop_carried {
                    match dep.distance {
                        Some(d) => write!(f, "loop-carried dependency (distance={d})")?,
                        None => write!(f, "loop-carried dependency (distance=unknown)")?,
                    }
                }
                if let (true, Some(desc)) = (dep.has_conflict(), &dep.conflict_description) {
                    write!(f, "\n    Conflict: {desc}")?;
                }
                writeln!(f)?;
            }
        }

        let suggestions = &analysis.suggested_transformations;
        if !suggestions.is_empty() {
            write!(f, "\nSuggested Transformations (ordered by confidence):\n")?;
            for (n, s) in suggestions.iter().take(self.config.max_suggestions).enumerate() {
                write!(f, "\n{}. {} (confidence: {})\n", n + 1, s.description, s.confidence)?;
                if let Some(example) = &s.example {
                    write!(f, "   Example:\n{example}\n")?;
                }
                if let Some(reason) = &s.explanation {
                    writeln!(f, "   Reason: {reason}")?;
                }
                if let Some(prior) = &s.reference {
                    writeln!(
                        f,
                        "   Reference: {} (performance gain: {})",
                        prior.transformation,
                        prior.gain_label()
                    )?;
                }
                if !s.hints.is_empty() {
                    writeln!(f, "   Hints: {}", s.hints.join(", "))?;
                }
            }
        }

        if !analysis.compiler_messages.is_empty() {
            write!(f, "\nCompiler Diagnostics:\n")?;
            for msg in analysis
                .compiler_messages
                .iter()
                .take(self.config.max_diagnostics)
            {
                writeln!(f, "  {msg}")?;
            }
        }

        Ok(())
    }
}

/// Render the text report
pub fn render_text(analysis: &VectorizationAnalysis, config: &ReportConfig) -> String {
    TextReport::new(analysis, config).to_string()
}

/// Render the analysis as pretty-printed JSON
pub fn render_json(analysis: &VectorizationAnalysis) -> serde_json::Result<String> {
    serde_json::to_string_pretty(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::dependency::DependencyInfo;
    use crate::features::diagnostics::CompilationStatus;
    use crate::features::suggestion::{PriorTransform, Suggestion, SuggestionKind};
    use pretty_assertions::assert_eq;

    fn adjacent() -> VectorizationAnalysis {
        VectorizationAnalysis::new(CompilationStatus::DependencyConflict, "a[i] = a[i-1];")
            .with_dependencies(vec![DependencyInfo::loop_carried_conflict(
                "a",
                "i",
                "i-1",
                1,
                "Write to a[i] conflicts with read from a[i-1] at iteration 1",
            )])
    }

    #[test]
    fn test_empty_analysis_header_only() {
        let analysis = VectorizationAnalysis::new(CompilationStatus::Success, "");
        let text = render_text(&analysis, &ReportConfig::default());

        assert_eq!(text, "Vectorization Analysis for provided code:\n\nStatus: success\n\n");
    }

    #[test]
    fn test_dependency_section() {
        let text = render_text(&adjacent(), &ReportConfig::default());

        assert_eq!(
            text,
            "Vectorization Analysis for provided code:\n\n\
             Status: dependency_conflict\n\n\
             Detected Dependencies:\n  \
             - a: loop-carried dependency (distance=1)\n    \
             Conflict: Write to a[i] conflicts with read from a[i-1] at iteration 1\n"
        );
    }

    #[test]
    fn test_suggestion_section() {
        let analysis = adjacent().with_suggestions(vec![
            Suggestion::new(
                SuggestionKind::LearnedPattern,
                "Previously successful transformation for similar dependency",
                0.95,
            )
            .with_reference(PriorTransform {
                transformation: SuggestionKind::LoopSplitting,
                code: "split".to_string(),
                performance_gain: None,
            }),
            Suggestion::new(SuggestionKind::LoopDistribution, "Distribute loop to separate a updates", 0.8)
                .with_example("\nfor (...) {}\n")
                .with_explanation("reads and writes conflict"),
            Suggestion::new(SuggestionKind::VectorWidth, "Try explicit vector width hints", 0.6)
                .with_hints(["#pragma GCC ivdep", "#pragma omp simd"]),
        ]);
        let text = render_text(&analysis, &ReportConfig::default());
        let section = text
            .split_once("\nSuggested Transformations (ordered by confidence):\n")
            .map(|(_, rest)| rest)
            .unwrap();

        assert_eq!(
            section,
            "\n1. Previously successful transformation for similar dependency (confidence: 0.95)\n\
             \x20  Reference: loop_splitting (performance gain: unknown)\n\
             \n2. Distribute loop to separate a updates (confidence: 0.8)\n\
             \x20  Example:\n\nfor (...) {}\n\n\
             \x20  Reason: reads and writes conflict\n\
             \n3. Try explicit vector width hints (confidence: 0.6)\n\
             \x20  Hints: #pragma GCC ivdep, #pragma omp simd\n"
        );
    }

    #[test]
    fn test_truncation_limits() {
        let messages: Vec<String> = (0..8).map(|n| format!("t.c:{n}:5: note: loop vectorized")).collect();
        let suggestions: Vec<Suggestion> = (0..4)
            .map(|n| Suggestion::new(SuggestionKind::VectorWidth, format!("s{n}"), 0.6))
            .collect();
        let analysis = VectorizationAnalysis::new(CompilationStatus::Success, "")
            .with_messages(messages)
            .with_suggestions(suggestions);

        let config = ReportConfig {
            max_suggestions: 2,
            max_diagnostics: 3,
        };
        let text = render_text(&analysis, &config);

        assert!(text.contains("\n2. s1 "));
        assert!(!text.contains("\n3. s2 "));
        assert_eq!(text.matches(": note: loop vectorized").count(), 3);

        let default_text = render_text(&analysis, &ReportConfig::default());
        assert_eq!(default_text.matches(": note: loop vectorized").count(), 5);
    }

    #[test]
    fn test_render_json_round_trips() {
        let analysis = adjacent();
        let json = render_json(&analysis).unwrap();
        let parsed: VectorizationAnalysis = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, analysis);
    }
}
