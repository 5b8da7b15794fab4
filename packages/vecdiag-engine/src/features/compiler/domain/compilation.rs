/// Raw compiler outcome
use serde::{Deserialize, Serialize};

/// How the compiler process ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum CompilerOutcome {
    /// Process exited with a code (0 = success)
    Exited { code: i32 },
    /// Killed after exceeding the configured bound
    TimedOut { after_secs: u64 },
    /// Could not be run at all (missing binary, temp file failure, signal)
    Unavailable { reason: String },
}

impl CompilerOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CompilerOutcome::Exited { code: 0 })
    }
}

/// Everything the compiler handed back for one snippet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilationOutput {
    pub outcome: CompilerOutcome,
    /// Raw diagnostic stream
    pub stderr: String,
    /// Generated assembly (zero exit only)
    pub assembly: Option<String>,
}

impl CompilationOutput {
    pub fn new(outcome: CompilerOutcome, stderr: impl Into<String>) -> Self {
        Self {
            outcome,
            stderr: stderr.into(),
            assembly: None,
        }
    }

    pub fn with_assembly(mut self, assembly: impl Into<String>) -> Self {
        self.assembly = Some(assembly.into());
        self
    }

    /// Output of a compiler that could not be run
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::new(
            CompilerOutcome::Unavailable {
                reason: reason.into(),
            },
            String::new(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_predicates() {
        assert!(CompilerOutcome::Exited { code: 0 }.is_success());
        assert!(!CompilerOutcome::Exited { code: 1 }.is_success());
        assert!(!CompilerOutcome::TimedOut { after_secs: 30 }.is_success());
        assert!(!CompilerOutcome::Unavailable {
            reason: "gone".to_string()
        }
        .is_success());
    }

    #[test]
    fn test_unavailable_output_has_no_diagnostics() {
        let output = CompilationOutput::unavailable("No such file or directory");
        assert!(output.stderr.is_empty());
        assert!(output.assembly.is_none());
    }

    #[test]
    fn test_outcome_serde_tag() {
        let json = serde_json::to_string(&CompilerOutcome::TimedOut { after_secs: 3 }).unwrap();
        assert_eq!(json, r#"{"kind":"timed_out","after_secs":3}"#);
    }
}
