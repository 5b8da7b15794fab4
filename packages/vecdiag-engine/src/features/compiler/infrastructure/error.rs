/// Compiler invocation errors
///
/// Internal to the infrastructure layer: `GccCompiler` folds every variant
/// into a `CompilerOutcome` before returning.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompilerError {
    #[error("Failed to stage source file: {0}")]
    TempFile(#[from] std::io::Error),

    #[error("Failed to run compiler '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Compiler exceeded {0}s")]
    Timeout(u64),

    #[error("Compiler terminated by signal")]
    Signaled,
}

pub type Result<T> = std::result::Result<T, CompilerError>;
