//! Error types for vecdiag-engine
//!
//! Feature errors fold into one crate-level enum for callers that do not
//! care which layer failed.

use crate::config::ConfigError;
use crate::features::session::SessionError;
use thiserror::Error;

/// Main error type for vecdiag operations
#[derive(Debug, Error)]
pub enum VecdiagError {
    /// Reading source input
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Session error
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Report serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl VecdiagError {
    /// Whether the error names a session that does not exist
    pub fn is_unknown_session(&self) -> bool {
        matches!(self, VecdiagError::Session(SessionError::NotFound(_)))
    }
}

/// Result type alias for vecdiag operations
pub type Result<T> = std::result::Result<T, VecdiagError>;
