//! Source and compiler-output fixtures

/// Scenario A: independent element-wise loop
pub const INDEPENDENT_LOOP: &str = "\
for (int i = 0; i < N; i++) {
    a[i] = b[i] + c[i];
}
";

/// Scenario B: adjacent loop-carried dependency
pub const ADJACENT_LOOP: &str = "\
for (int i = 1; i < N; i++) {
    a[i] = a[i-1] + b[i];
}
";

/// Scenario C: mirrored read around LEN_1D/2
pub const MIRRORED_LOOP: &str = "\
for (int i = 0; i < LEN_1D; i++) {
    a[i] = a[LEN_1D/2 - i] + b[i];
}
";

/// Same loops written on a single line
pub const ADJACENT_ONE_LINE: &str = "for (int i = 1; i < N; i++) a[i] = a[i-1] + b[i];";
pub const MIRRORED_ONE_LINE: &str = "for (int i = 0; i < LEN_1D; i++) a[i] = a[LEN_1D/2 - i] + b[i];";

/// `-fopt-info` output for a loop GCC vectorized
pub const GCC_VECTORIZED: &str = "\
kernel.c:1:23: optimized: loop vectorized using 32 byte vectors
kernel.c:1:23: optimized: loop versioned for vectorization because of possible aliasing
";

/// `-fopt-info` output for a loop GCC gave up on
pub const GCC_MISSED_DEPENDENCE: &str = "\
kernel.c:1:23: missed: couldn't vectorize loop
kernel.c:2:10: missed: not vectorized, possible dependence between data-refs a[_1] and a[i_12]
kernel.c:1:23: note: vectorized 0 loops in function.
";

/// `-fopt-info` output blaming alignment
pub const GCC_MISSED_ALIGNMENT: &str = "\
kernel.c:1:23: missed: not vectorized: unsupported unaligned access, alignment of access forced
";

/// Loop body with `n` independent statements over distinct arrays
pub fn fixture_independent_statements(n: usize) -> String {
    let body: String = (0..n)
        .map(|k| format!("    out{k}[i] = in{k}[i] * 2;\n"))
        .collect();
    format!("for (int i = 0; i < N; i++) {{\n{body}}}\n")
}
