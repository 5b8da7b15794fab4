//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! Each feature contains:
//! - domain/         - Pure data types and their invariants
//! - ports/          - Interface definitions (traits), where a seam exists
//! - infrastructure/ - Implementations (regex scanners, child processes, stores)

// Text scanning: loop headers and array subscripts
pub mod extraction;

// Loop-carried dependency heuristics over extracted accesses
pub mod dependency;

// Compiler output filtering and status classification
pub mod diagnostics;

// Ranked transformation proposals
pub mod suggestion;

// Compiler collaborator (async port + GCC executor)
pub mod compiler;

// Per-session history, learned patterns, transform records
pub mod session;
