//! Engine configuration
//!
//! Defaults reproduce the stock GCC invocation. Values can come from a
//! versioned YAML file and be overridden from the environment.

use super::error::{ConfigError, ConfigResult};
use super::validation::{check_not_blank, check_range, Validatable};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Supported YAML schema versions
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// Environment variable overriding `compiler.path`
pub const ENV_COMPILER: &str = "VECDIAG_COMPILER";
/// Environment variable overriding `compiler.timeout_secs`
pub const ENV_COMPILER_TIMEOUT: &str = "VECDIAG_COMPILER_TIMEOUT";

/// Compiler collaborator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerConfig {
    /// Compiler executable
    pub path: String,
    /// Optimization flags
    pub base_flags: Vec<String>,
    /// Flags that make the compiler report vectorization decisions
    pub diagnostic_flags: Vec<String>,
    /// Upper bound for one compilation
    pub timeout_secs: u64,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            path: "gcc".to_string(),
            base_flags: vec![
                "-O3".to_string(),
                "-march=native".to_string(),
                "-fopt-info-vec-all".to_string(),
            ],
            diagnostic_flags: vec![
                "-fopt-info-vec-missed".to_string(),
                "-fopt-info-loop-all".to_string(),
            ],
            timeout_secs: 30,
        }
    }
}

impl Validatable for CompilerConfig {
    fn validate(&self) -> ConfigResult<()> {
        check_not_blank("compiler.path", &self.path)?;
        check_range(
            "compiler.timeout_secs",
            self.timeout_secs,
            1,
            600,
            "Compilation needs at least one second and is capped at ten minutes",
        )
    }

    fn config_name(&self) -> &'static str {
        "CompilerConfig"
    }
}

/// Report rendering settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Suggestions rendered in the text report
    pub max_suggestions: usize,
    /// Raw compiler diagnostic lines rendered in the text report
    pub max_diagnostics: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_suggestions: 10,
            max_diagnostics: 5,
        }
    }
}

impl Validatable for ReportConfig {
    fn validate(&self) -> ConfigResult<()> {
        check_range(
            "report.max_suggestions",
            self.max_suggestions,
            1,
            100,
            "At least one suggestion must be shown",
        )?;
        check_range(
            "report.max_diagnostics",
            self.max_diagnostics,
            0,
            100,
            "Use 0 to hide compiler diagnostics",
        )
    }

    fn config_name(&self) -> &'static str {
        "ReportConfig"
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub compiler: CompilerConfig,
    pub report: ReportConfig,
}

/// YAML schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct EngineConfigV1 {
    /// Schema version (always 1 for v1)
    version: Option<u32>,

    #[serde(default)]
    compiler: CompilerConfig,

    #[serde(default)]
    report: ReportConfig,
}

impl EngineConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let export: EngineConfigV1 = serde_yaml::from_str(yaml)?;

        let version = export.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let config = Self {
            compiler: export.compiler,
            report: export.report,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!("loading engine config from {}", path.as_ref().display());
        Self::from_yaml_str(&content)
    }

    /// Serialize as a v1 YAML document
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = EngineConfigV1 {
            version: Some(1),
            compiler: self.compiler.clone(),
            report: self.report.clone(),
        };
        Ok(serde_yaml::to_string(&export)?)
    }

    /// Apply `VECDIAG_*` overrides from the process environment
    pub fn with_env_overrides(self) -> ConfigResult<Self> {
        self.with_overrides(|var| std::env::var(var).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_COMPILER) {
            self.compiler.path = path;
        }

        if let Some(raw) = lookup(ENV_COMPILER_TIMEOUT) {
            self.compiler.timeout_secs =
                raw.trim()
                    .parse()
                    .map_err(|e: std::num::ParseIntError| ConfigError::InvalidEnv {
                        var: ENV_COMPILER_TIMEOUT.to_string(),
                        value: raw.clone(),
                        reason: e.to_string(),
                    })?;
        }

        self.validate()?;
        Ok(self)
    }

    /// Override the compiler executable
    pub fn compiler_path(mut self, path: impl Into<String>) -> Self {
        self.compiler.path = path.into();
        self
    }

    /// Override the compilation timeout
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.compiler.timeout_secs = secs;
        self
    }
}

impl Validatable for EngineConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.compiler.validate()?;
        self.report.validate()
    }

    fn config_name(&self) -> &'static str {
        "EngineConfig"
    }
}
