pub mod access_extractor;
pub mod loop_extractor;
pub mod patterns;

pub use access_extractor::AccessExtractor;
pub use loop_extractor::{LoopExtractor, DEFAULT_END_BOUND};
