//! Compiler collaborators with fixed output

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use vecdiag_engine::{
    AnalysisOrchestrator, CompilationOutput, CompilerOutcome, CompilerPort, EngineConfig,
};

/// Returns the same outcome and stderr for every snippet
pub struct CannedCompiler {
    outcome: CompilerOutcome,
    stderr: String,
    calls: AtomicUsize,
}

impl CannedCompiler {
    pub fn new(outcome: CompilerOutcome, stderr: impl Into<String>) -> Self {
        Self {
            outcome,
            stderr: stderr.into(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Clean exit with the given diagnostics
    pub fn exited_ok(stderr: impl Into<String>) -> Self {
        Self::new(CompilerOutcome::Exited { code: 0 }, stderr)
    }

    /// Compiler that could not be launched
    pub fn missing() -> Self {
        Self::new(
            CompilerOutcome::Unavailable {
                reason: "No such file or directory".to_string(),
            },
            "",
        )
    }

    pub fn timed_out() -> Self {
        Self::new(CompilerOutcome::TimedOut { after_secs: 30 }, "")
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompilerPort for CannedCompiler {
    async fn compile(&self, _source: &str) -> CompilationOutput {
        self.calls.fetch_add(1, Ordering::SeqCst);
        CompilationOutput::new(self.outcome.clone(), self.stderr.clone())
    }

    fn name(&self) -> &str {
        "canned"
    }
}

/// Orchestrator with default config over a canned compiler
pub fn orchestrator_with(compiler: CannedCompiler) -> AnalysisOrchestrator {
    AnalysisOrchestrator::with_compiler(EngineConfig::default(), Arc::new(compiler))
}
