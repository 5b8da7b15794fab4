//! Example code for transformation suggestions
//!
//! Examples are illustrative C snippets, not rewrites of the input. They are
//! parameterized by the first loop header found and the conflicting indices.

use crate::features::dependency::DependencyInfo;
use crate::features::extraction::LoopInfo;

/// Loop bounds used to render examples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopShape<'a> {
    pub var: &'a str,
    pub start: &'a str,
    pub end: &'a str,
}

impl Default for LoopShape<'_> {
    fn default() -> Self {
        Self {
            var: "i",
            start: "0",
            end: "N",
        }
    }
}

impl<'a> LoopShape<'a> {
    /// Shape of the first loop, or `i = 0 .. N` when there is none
    pub fn of(loops: &'a [LoopInfo]) -> Self {
        loops.first().map_or_else(Self::default, |l| Self {
            var: &l.loop_var,
            start: &l.start,
            end: &l.end,
        })
    }
}

/// Two half loops meeting at the midpoint of the iteration space
pub fn split_example(shape: &LoopShape<'_>, dep: &DependencyInfo) -> String {
    let LoopShape { var, start, end } = *shape;
    let mid = format!("{end}/2");
    let arr = &dep.variable;
    let write = dep.first_write_index().unwrap_or(var);
    let read = dep.first_read_index().unwrap_or(var);
    let distance = dep
        .distance
        .map_or_else(|| "unknown".to_string(), |d| d.to_string());

    format!(
        "\n// Original loop has dependency at distance {distance}\n\
         // Split into two loops to avoid overlap:\n\
         \n\
         // First half - reads come from the unmodified second half\n\
         for (int {var} = {start}; {var} < {mid}; {var}++) {{\n    \
         {arr}[{write}] = {arr}[{read}];\n\
         }}\n\
         \n\
         // Second half - reads come from the already processed first half\n\
         for (int {var} = {mid}; {var} < {end}; {var}++) {{\n    \
         {arr}[{write}] = {arr}[{read}];\n\
         }}\n"
    )
}

/// Read, compute and write phases as three independent loops
pub fn distribution_example(shape: &LoopShape<'_>, dep: &DependencyInfo) -> String {
    let LoopShape { var, start, end } = *shape;
    let arr = &dep.variable;
    let write = dep.first_write_index().unwrap_or(var);
    let read = dep.first_read_index().unwrap_or(var);

    format!(
        "\n// Distribute loop to break dependency on {arr}\n\
         // Original loop combines read and write operations that conflict\n\
         \n\
         // Step 1: Read phase (vectorizable)\n\
         for (int {var} = {start}; {var} < {end}; {var}++) {{\n    \
         temp[{var}] = {arr}[{read}];\n\
         }}\n\
         \n\
         // Step 2: Compute phase (vectorizable)\n\
         for (int {var} = {start}; {var} < {end}; {var}++) {{\n    \
         temp[{var}] = compute(temp[{var}], other_data[{var}]);\n\
         }}\n\
         \n\
         // Step 3: Write phase (vectorizable)\n\
         for (int {var} = {start}; {var} < {end}; {var}++) {{\n    \
         {arr}[{write}] = temp[{var}];\n\
         }}\n\
         \n\
         // Reads and writes of {arr} no longer share an iteration\n"
    )
}
