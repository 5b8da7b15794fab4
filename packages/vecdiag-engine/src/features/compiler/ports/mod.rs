pub mod compiler_port;

pub use compiler_port::CompilerPort;
