//! GCC-style compiler executor
//!
//! Stages the snippet in a temporary `.c` file and runs
//! `<path> <base_flags> <diagnostic_flags> -S -o - <file>`, capturing the
//! `-fopt-info` stream from stderr.

use super::error::{CompilerError, Result};
use crate::config::CompilerConfig;
use crate::features::compiler::{CompilationOutput, CompilerOutcome, CompilerPort};
use async_trait::async_trait;
use std::io::Write;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Compiler executor for GCC-compatible command lines
pub struct GccCompiler {
    config: CompilerConfig,
}

impl GccCompiler {
    pub fn new(config: CompilerConfig) -> Self {
        Self { config }
    }

    /// Full argument list for a staged source file
    pub fn command_args(&self, source_path: &Path) -> Vec<String> {
        let mut args: Vec<String> = self
            .config
            .base_flags
            .iter()
            .chain(self.config.diagnostic_flags.iter())
            .cloned()
            .collect();
        args.extend(["-S", "-o", "-"].map(String::from));
        args.push(source_path.display().to_string());
        args
    }

    async fn try_compile(&self, source: &str) -> Result<CompilationOutput> {
        let mut staged = tempfile::Builder::new()
            .prefix("vecdiag-")
            .suffix(".c")
            .tempfile()?;
        staged.write_all(source.as_bytes())?;
        staged.flush()?;

        let mut cmd = Command::new(&self.config.path);
        cmd.args(self.command_args(staged.path()))
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let bound = Duration::from_secs(self.config.timeout_secs);
        let output = match tokio::time::timeout(bound, cmd.output()).await {
            Ok(result) => result.map_err(|source| CompilerError::Spawn {
                program: self.config.path.clone(),
                source,
            })?,
            Err(_) => return Err(CompilerError::Timeout(self.config.timeout_secs)),
        };

        let code = output.status.code().ok_or(CompilerError::Signaled)?;
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        let mut compiled = CompilationOutput::new(CompilerOutcome::Exited { code }, stderr);

        if code == 0 {
            compiled = compiled.with_assembly(String::from_utf8_lossy(&output.stdout));
        }

        Ok(compiled)
    }
}

#[async_trait]
impl CompilerPort for GccCompiler {
    async fn compile(&self, source: &str) -> CompilationOutput {
        match self.try_compile(source).await {
            Ok(output) => {
                tracing::debug!(compiler = %self.config.path, outcome = ?output.outcome, "compilation finished");
                output
            }
            Err(CompilerError::Timeout(after_secs)) => {
                tracing::warn!(compiler = %self.config.path, "compilation timed out after {}s", after_secs);
                CompilationOutput::new(CompilerOutcome::TimedOut { after_secs }, String::new())
            }
            Err(e) => {
                tracing::warn!(compiler = %self.config.path, "compiler unavailable: {}", e);
                CompilationOutput::unavailable(e.to_string())
            }
        }
    }

    fn name(&self) -> &str {
        &self.config.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compiler_with_path(path: &str) -> GccCompiler {
        GccCompiler::new(CompilerConfig {
            path: path.to_string(),
            ..CompilerConfig::default()
        })
    }

    #[test]
    fn test_command_args_order() {
        let compiler = GccCompiler::new(CompilerConfig::default());
        let args = compiler.command_args(Path::new("/tmp/x.c"));

        assert_eq!(
            args,
            vec![
                "-O3",
                "-march=native",
                "-fopt-info-vec-all",
                "-fopt-info-vec-missed",
                "-fopt-info-loop-all",
                "-S",
                "-o",
                "-",
                "/tmp/x.c",
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_binary_is_unavailable() {
        let compiler = compiler_with_path("/nonexistent/bin/vecdiag-no-such-cc");
        let output = compiler.compile("int main(void) { return 0; }").await;

        assert!(matches!(output.outcome, CompilerOutcome::Unavailable { .. }));
        assert!(output.assembly.is_none());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_nonzero_exit_is_data() {
        // `false` ignores its arguments and exits 1
        let compiler = compiler_with_path("false");
        let output = compiler.compile("for (;;)").await;

        assert_eq!(output.outcome, CompilerOutcome::Exited { code: 1 });
        assert!(output.assembly.is_none());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_zero_exit_keeps_stdout() {
        // `true` exits 0 with empty output
        let compiler = compiler_with_path("true");
        let output = compiler.compile("int x;").await;

        assert!(output.outcome.is_success());
        assert_eq!(output.assembly.as_deref(), Some(""));
    }
}
