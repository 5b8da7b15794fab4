//! Engine configuration
//!
//! Two sections, both optional in YAML:
//! - `compiler`: executable, flags and timeout of the compiler collaborator
//! - `report`: how much of an analysis the text report renders
//!
//! # Examples
//!
//! ```rust,ignore
//! use vecdiag_engine::config::EngineConfig;
//!
//! let config = EngineConfig::from_yaml_file("vecdiag.yaml")?.with_env_overrides()?;
//! ```

pub mod engine_config;
pub mod error;
pub mod validation;

// Re-exports
pub use engine_config::{
    CompilerConfig, EngineConfig, ReportConfig, ENV_COMPILER, ENV_COMPILER_TIMEOUT,
    SUPPORTED_VERSIONS,
};
pub use error::{ConfigError, ConfigResult};
pub use validation::Validatable;
