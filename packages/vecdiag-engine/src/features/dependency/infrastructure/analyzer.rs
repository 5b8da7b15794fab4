//! Loop-carried dependency analyzer
//!
//! Handles patterns where write and read indices meet in a different
//! iteration, e.g. `a[i] = a[i-1]` (adjacent) or `a[i] = a[LEN_1D/2 - i]`
//! (mirrored around a quarter of the bound).
//!
//! Output order is deterministic: arrays in first-seen order, then writes
//! (outer) against reads (inner), both in source order.

use crate::features::dependency::domain::DependencyInfo;
use crate::features::extraction::{AccessExtractor, ArrayAccess, LoopExtractor, LoopInfo};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// `i+1`, `i - 2`, ... anchored at the start of the index text
static OFFSET_INDEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^i\s*[+-]\s*\d+").expect("offset index pattern is valid"));

/// Dependency analyzer
///
/// Stateless; every call re-extracts loops and accesses from the text.
#[derive(Debug, Default, Clone, Copy)]
pub struct DependencyAnalyzer;

impl DependencyAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze source text for loop-carried dependencies
    pub fn analyze(&self, source: &str) -> Vec<DependencyInfo> {
        let loops = LoopExtractor::extract_all(source);
        let mut accesses = AccessExtractor::extract(source);
        AccessExtractor::attach_loops(&mut accesses, &loops);

        self.analyze_accesses(&accesses, &loops)
    }

    /// Pair writes against reads over already extracted accesses
    pub fn analyze_accesses(
        &self,
        accesses: &[ArrayAccess],
        loops: &[LoopInfo],
    ) -> Vec<DependencyInfo> {
        let mut dependencies = Vec::new();

        for (array_name, group) in group_by_array(accesses) {
            let (writes, reads): (Vec<&ArrayAccess>, Vec<&ArrayAccess>) =
                group.into_iter().partition(|a| a.is_write);

            for write in &writes {
                for read in &reads {
                    if let Some(dep) = check_iteration_overlap(array_name, write, read) {
                        tracing::debug!(
                            array = array_name,
                            line = write.line_number,
                            in_loop = write.enclosing_loop(loops).map(|l| l.loop_var.as_str()),
                            "loop-carried conflict: {}",
                            dep.conflict_description.as_deref().unwrap_or_default()
                        );
                        dependencies.push(dep);
                    }
                }
            }
        }

        dependencies
    }
}

/// Group accesses by array name, keeping first-seen order of names
fn group_by_array(accesses: &[ArrayAccess]) -> Vec<(&str, Vec<&ArrayAccess>)> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&ArrayAccess>)> = Vec::new();

    for access in accesses {
        let name = access.array_name.as_str();
        let slot = *positions.entry(name).or_insert_with(|| {
            groups.push((name, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(access);
    }

    groups
}

fn check_iteration_overlap(
    array_name: &str,
    write: &ArrayAccess,
    read: &ArrayAccess,
) -> Option<DependencyInfo> {
    let write_idx = write.index_expr.as_str();
    let read_idx = read.index_expr.as_str();

    if !indices_can_overlap(write_idx, read_idx) {
        return None;
    }

    let overlap_point = calculate_overlap_point(write_idx, read_idx);
    let description = format!(
        "Write to {array_name}[{write_idx}] conflicts with read from {array_name}[{read_idx}] at iteration {overlap_point}"
    );

    Some(DependencyInfo::loop_carried_conflict(
        array_name,
        write_idx,
        read_idx,
        overlap_point,
        description,
    ))
}

/// Whether two index expressions may name the same element
///
/// - `i` against a subtraction mentioning `i` (`N/2 - i`, `N - i`, `i-1`)
/// - either side an offset of `i` (`i+1`, `i-1`)
pub fn indices_can_overlap(idx1: &str, idx2: &str) -> bool {
    if idx1.contains('i') && idx2.contains('i') {
        if idx2.contains('-') && idx1.trim() == "i" {
            return true;
        }
        if idx1.contains('-') && idx2.trim() == "i" {
            return true;
        }
    }

    OFFSET_INDEX.is_match(idx1) || OFFSET_INDEX.is_match(idx2)
}

/// Symbolic iteration class at which the indices meet
///
/// `4` for `i` vs `bound/2 - i` (meet at bound/4), `2` for `i` vs
/// `N - i` (meet at N/2), `1` for adjacent iterations.
pub fn calculate_overlap_point(_write_idx: &str, read_idx: &str) -> i64 {
    if read_idx.contains("N/2") || read_idx.contains("LEN_1D/2") {
        4
    } else if read_idx.contains('N') && read_idx.contains('-') {
        2
    } else {
        1
    }
}
