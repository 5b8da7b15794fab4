//! Common test utilities for vecdiag-engine
//!
//! Canned compiler collaborators, source fixtures and shared assertions for
//! the integration tests.

#![allow(dead_code)]

mod assertions;
mod compilers;
mod fixtures;

pub use assertions::*;
pub use compilers::*;
pub use fixtures::*;
