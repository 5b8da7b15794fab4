/// Compiler port trait
use crate::features::compiler::CompilationOutput;
use async_trait::async_trait;

/// Port trait for compiler collaborators
///
/// Allows for different implementations (e.g., GCC, Clang, canned output in tests).
/// Implementations must not fail: any problem running the compiler is
/// reported through `CompilationOutput::outcome`.
#[async_trait]
pub trait CompilerPort: Send + Sync {
    /// Compile a snippet and capture its diagnostics
    async fn compile(&self, source: &str) -> CompilationOutput;

    /// Short name for logs
    fn name(&self) -> &str;
}
