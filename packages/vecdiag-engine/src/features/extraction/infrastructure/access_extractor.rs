//! Array access extraction
//!
//! Read/write classification is line-scoped: an access is a write when it
//! appears before the line's first `=`. Two identical subscripts on one line
//! share the position of the first occurrence.

use super::patterns::{ARRAY_ACCESS, LOOP_HEADER};
use crate::features::extraction::domain::{ArrayAccess, LoopInfo};

/// Array access extractor
pub struct AccessExtractor;

impl AccessExtractor {
    /// Extract every `<identifier>[<expression>]` occurrence in source order
    pub fn extract(source: &str) -> Vec<ArrayAccess> {
        let mut accesses = Vec::new();

        for (line_number, line) in source.lines().enumerate() {
            let assignment = assignment_offset(line);

            for caps in ARRAY_ACCESS.captures_iter(line) {
                let matched = caps.get(0).map_or("", |m| m.as_str());

                let is_write = match (assignment, line.find(matched)) {
                    (Some(eq), Some(pos)) => pos < eq,
                    _ => false,
                };

                accesses.push(ArrayAccess {
                    array_name: caps[1].to_string(),
                    index_expr: caps[2].to_string(),
                    line_number,
                    is_write,
                    loop_index: None,
                });
            }
        }

        accesses
    }

    /// Link each access to the innermost loop whose line range contains it
    pub fn attach_loops(accesses: &mut [ArrayAccess], loops: &[LoopInfo]) {
        for access in accesses.iter_mut() {
            access.loop_index = loops
                .iter()
                .enumerate()
                .filter(|(_, lp)| lp.contains_line(access.line_number))
                .min_by_key(|(idx, lp)| (lp.span(), std::cmp::Reverse(*idx)))
                .map(|(idx, _)| idx);
        }
    }
}

/// Offset of the first `=` that belongs to the statement part of the line
///
/// A `for (...)` header on the line is skipped so that its initializer does
/// not swallow the assignment of a one-line loop body.
fn assignment_offset(line: &str) -> Option<usize> {
    let from = LOOP_HEADER.find(line).map_or(0, |m| m.end());
    line[from..].find('=').map(|pos| from + pos)
}
