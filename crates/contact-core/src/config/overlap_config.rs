use serde::{Deserialize, Serialize};

use super::defaults;

/// How distance between two locations is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    /// Euclidean distance over (latitude, longitude) in degrees.
    #[default]
    Planar,
    /// Great-circle distance in meters.
    Haversine,
}

/// Overlap detection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlapConfig {
    /// Maximum distance at which two locations count as the same place.
    /// Same unit as `distance_metric`.
    pub microcell_radius: f64,
    pub distance_metric: DistanceMetric,
    /// Run pairwise detection on the rayon pool.
    pub parallel: bool,
    /// Node-pair comparisons above which a scaling warning is logged.
    pub max_pair_comparisons: u64,
}

impl Default for OverlapConfig {
    fn default() -> Self {
        Self {
            microcell_radius: defaults::DEFAULT_MICROCELL_RADIUS,
            distance_metric: DistanceMetric::default(),
            parallel: defaults::DEFAULT_PARALLEL,
            max_pair_comparisons: defaults::DEFAULT_MAX_PAIR_COMPARISONS,
        }
    }
}
