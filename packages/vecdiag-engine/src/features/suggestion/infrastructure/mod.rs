pub mod engine;
pub mod examples;

pub use engine::SuggestionEngine;
