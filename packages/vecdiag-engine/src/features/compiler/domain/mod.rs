pub mod compilation;

pub use compilation::*;
