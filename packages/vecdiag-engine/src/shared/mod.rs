//! Shared module - Types used across features
//!
//! Results that cross feature boundaries live here so features depend on
//! `shared` instead of on each other's infrastructure.

pub mod models;

pub use models::*;
