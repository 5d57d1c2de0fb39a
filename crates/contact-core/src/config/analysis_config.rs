use serde::{Deserialize, Serialize};

use super::defaults;

/// Population analysis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Number of high-traffic locations to report.
    pub top_k_traffic: usize,
    /// Seed for the community detection node ordering.
    pub community_seed: u64,
    /// Modularity resolution (γ). Higher values yield smaller communities.
    pub community_resolution: f64,
    /// Upper bound on local-moving + aggregation passes.
    pub community_max_passes: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_k_traffic: defaults::DEFAULT_TOP_K_TRAFFIC,
            community_seed: defaults::DEFAULT_COMMUNITY_SEED,
            community_resolution: defaults::DEFAULT_COMMUNITY_RESOLUTION,
            community_max_passes: defaults::DEFAULT_COMMUNITY_MAX_PASSES,
        }
    }
}
