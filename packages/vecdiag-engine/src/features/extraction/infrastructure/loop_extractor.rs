//! Loop header extraction
//!
//! One [`LoopInfo`] per line carrying a `for (...)` header. Loops are not
//! scoped: nested loops produce a flat list in source order.

use super::patterns::{COMPARISON, LOOP_HEADER};
use crate::features::extraction::domain::LoopInfo;

/// Fallback end bound when the condition has no usable comparison
pub const DEFAULT_END_BOUND: &str = "N";

/// Loop header extractor
pub struct LoopExtractor;

impl LoopExtractor {
    /// Lazily scan `source` for loop headers
    ///
    /// The returned iterator borrows `source` and recomputes everything on
    /// each call; nothing is cached.
    pub fn extract(source: &str) -> impl Iterator<Item = LoopInfo> + '_ {
        source
            .lines()
            .enumerate()
            .filter_map(move |(line_idx, line)| {
                let caps = LOOP_HEADER.captures(line)?;
                let header_end = caps.get(0).map_or(line.len(), |m| m.end());

                let loop_var = caps[1].to_string();
                let init = caps[2].trim();
                let condition = caps[3].trim();
                let increment = caps[4].trim();

                Some(LoopInfo {
                    start: start_bound(init),
                    end: end_bound(condition, &loop_var),
                    step: step_of(increment),
                    body_start_line: line_idx,
                    body_end_line: block_end(source, line_idx, &line[header_end..]),
                    loop_var,
                })
            })
    }

    /// Collect all loops of `source`
    pub fn extract_all(source: &str) -> Vec<LoopInfo> {
        Self::extract(source).collect()
    }
}

/// `"0"` when the initializer mentions a zero anywhere, else the text after the last `=`
fn start_bound(init: &str) -> String {
    if init.contains('0') {
        return "0".to_string();
    }
    init.rsplit('=').next().unwrap_or("").trim().to_string()
}

/// The side of the comparison that is not the loop variable
fn end_bound(condition: &str, loop_var: &str) -> String {
    let Some(op) = COMPARISON.find(condition) else {
        return DEFAULT_END_BOUND.to_string();
    };

    let lhs = condition[..op.start()].trim();
    let rhs = condition[op.end()..].trim();

    let bound = if lhs == loop_var {
        rhs
    } else if rhs == loop_var {
        lhs
    } else {
        rhs
    };

    if bound.is_empty() {
        DEFAULT_END_BOUND.to_string()
    } else {
        bound.to_string()
    }
}

fn step_of(increment: &str) -> String {
    if increment.contains("++") {
        "1".to_string()
    } else {
        increment.to_string()
    }
}

/// Line on which the loop body closes
///
/// Brace counting starts right after the header. A header followed by a
/// statement on the same line ends there; a header alone on its line owns the
/// next line unless that line opens a block.
fn block_end(source: &str, header_line: usize, header_tail: &str) -> usize {
    let mut depth: i64 = 0;
    let mut opened = false;

    let tail_lines = std::iter::once(header_tail).chain(source.lines().skip(header_line + 1));
    let mut last = header_line;

    for (offset, line) in tail_lines.enumerate() {
        let line_idx = header_line + offset;
        last = line_idx;

        if !opened && offset == 1 && !line.trim_start().starts_with('{') {
            // Unbraced body on the line after the header
            return if header_tail.trim().is_empty() {
                line_idx
            } else {
                header_line
            };
        }

        for ch in line.chars() {
            match ch {
                '{' => {
                    depth += 1;
                    opened = true;
                }
                '}' => depth -= 1,
                _ => {}
            }
            if opened && depth <= 0 {
                return line_idx;
            }
        }

        if !opened && offset == 0 && !header_tail.trim().is_empty() {
            return header_line;
        }
    }

    // Unterminated block runs to the end of the source
    last
}
