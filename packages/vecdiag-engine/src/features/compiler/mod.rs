/// Compiler Collaborator Feature
///
/// Runs a native compiler on a snippet and reports its raw outcome.
///
/// ## Architecture
/// - **Domain**: `CompilerOutcome`, `CompilationOutput`
/// - **Ports**: `CompilerPort` trait (async)
/// - **Infrastructure**: `GccCompiler` (temporary `.c` file + child process)
///
/// ## Note
/// Every failure mode (missing binary, non-zero exit, timeout) is returned as
/// data in `CompilerOutcome`, never as an error.
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::*;
pub use infrastructure::*;
pub use ports::*;
