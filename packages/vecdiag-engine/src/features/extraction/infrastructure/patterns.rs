//! Compiled text patterns shared by the extractors

use once_cell::sync::Lazy;
use regex::Regex;

/// `for (<type words>* <var> <init>; <cond>; <incr>)`
///
/// Groups: 1 = loop variable, 2 = initializer rest, 3 = condition, 4 = increment.
pub static LOOP_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"for\s*\(\s*(?:\w+\s+)*(\w+)\s*([^;]*);\s*([^;]*);\s*([^)]*)\)")
        .expect("loop header pattern is valid")
});

/// `<identifier>[<expression>]`
///
/// Groups: 1 = array name, 2 = index expression.
pub static ARRAY_ACCESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)\[([^\]]+)\]").expect("array access pattern is valid"));

/// Ordering comparison in a loop condition
pub static COMPARISON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[<>]=?").expect("comparison pattern is valid"));
