//! Configuration for the contact-tracing engine.
//!
//! Loaded from TOML; every section and field falls back to `defaults`.

pub mod analysis_config;
pub mod defaults;
pub mod observability_config;
pub mod overlap_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use analysis_config::AnalysisConfig;
pub use observability_config::ObservabilityConfig;
pub use overlap_config::{DistanceMetric, OverlapConfig};

use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub overlap: OverlapConfig,
    pub analysis: AnalysisConfig,
    pub observability: ObservabilityConfig,
}

impl ContactConfig {
    /// Load and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config: ContactConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML string. Does not validate.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Reject values that would make the run meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let radius = self.overlap.microcell_radius;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "overlap.microcell_radius".to_string(),
                message: format!("must be a positive finite number, got {radius}"),
            });
        }
        if self.analysis.top_k_traffic == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "analysis.top_k_traffic".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        let resolution = self.analysis.community_resolution;
        if !resolution.is_finite() || resolution <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "analysis.community_resolution".to_string(),
                message: format!("must be a positive finite number, got {resolution}"),
            });
        }
        if self.analysis.community_max_passes == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "analysis.community_max_passes".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
