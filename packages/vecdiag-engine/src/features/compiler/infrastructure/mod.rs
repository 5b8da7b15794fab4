pub mod error;
pub mod gcc_compiler;

pub use error::CompilerError;
pub use gcc_compiler::GccCompiler;
