/// Source Extraction Feature
///
/// Lightweight, line-oriented scanning of C-like loop code.
///
/// ## Features
/// - **Loop headers**: `for (<var> <init>; <cond>; <incr>)` with textual bounds
/// - **Array accesses**: `<identifier>[<expression>]` with read/write classification
///
/// ## Note
/// Extraction is pattern matching over text, not parsing. Malformed input
/// yields fewer items and never an error.
pub mod domain;
pub mod infrastructure;

// Re-export domain types
pub use domain::*;

pub use infrastructure::*;
