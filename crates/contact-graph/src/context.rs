//! Immutable run parameters handed to every pipeline stage.

use contact_core::config::{ContactConfig, DistanceMetric};
use contact_core::errors::ContactResult;

/// Validated, read-only parameters for one analysis run.
///
/// Built once from a [`ContactConfig`]; construction fails on invalid
/// configuration so nothing downstream has to re-check it.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisContext {
    pub microcell_radius: f64,
    pub metric: DistanceMetric,
    pub parallel: bool,
    pub max_pair_comparisons: u64,
    pub top_k_traffic: usize,
    pub community_seed: u64,
    pub community_resolution: f64,
    pub community_max_passes: usize,
}

impl AnalysisContext {
    pub fn from_config(config: &ContactConfig) -> ContactResult<Self> {
        config.validate()?;
        Ok(Self {
            microcell_radius: config.overlap.microcell_radius,
            metric: config.overlap.distance_metric,
            parallel: config.overlap.parallel,
            max_pair_comparisons: config.overlap.max_pair_comparisons,
            top_k_traffic: config.analysis.top_k_traffic,
            community_seed: config.analysis.community_seed,
            community_resolution: config.analysis.community_resolution,
            community_max_passes: config.analysis.community_max_passes,
        })
    }

    /// Default configuration with a custom planar radius.
    pub fn with_radius(microcell_radius: f64) -> ContactResult<Self> {
        let mut config = ContactConfig::default();
        config.overlap.microcell_radius = microcell_radius;
        Self::from_config(&config)
    }

    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}
