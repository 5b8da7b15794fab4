/// Loop and array-access models
use serde::{Deserialize, Serialize};

/// Loop header extracted from source text
///
/// Bounds are kept as the literal text found in the header. They are never
/// evaluated; later stages only compare them by substring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoopInfo {
    /// Loop variable (e.g., "i")
    pub loop_var: String,
    /// Start bound (e.g., "0")
    pub start: String,
    /// End bound (e.g., "LEN_1D")
    pub end: String,
    /// Step (e.g., "1", "i += 2")
    pub step: String,
    /// Header line (0-based)
    pub body_start_line: usize,
    /// Line where the loop body closes (0-based)
    pub body_end_line: usize,
}

impl LoopInfo {
    /// Check if a line is within this loop
    pub fn contains_line(&self, line: usize) -> bool {
        line >= self.body_start_line && line <= self.body_end_line
    }

    /// Number of lines spanned by the loop
    pub fn span(&self) -> usize {
        self.body_end_line - self.body_start_line
    }
}

/// Array subscript occurrence (`a[i - 1]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayAccess {
    /// Array identifier
    pub array_name: String,
    /// Subscript text, untrimmed
    pub index_expr: String,
    /// Line number (0-based)
    pub line_number: usize,
    /// Whether the access is on the assigned side of the line
    pub is_write: bool,
    /// Index of the enclosing loop in the loop list of the same extraction
    pub loop_index: Option<usize>,
}

impl ArrayAccess {
    /// Resolve the enclosing loop against the loop list it was attached to
    pub fn enclosing_loop<'a>(&self, loops: &'a [LoopInfo]) -> Option<&'a LoopInfo> {
        self.loop_index.and_then(|idx| loops.get(idx))
    }
}
