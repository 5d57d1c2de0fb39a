// Single source of truth for all default values.

// --- Overlap ---
pub const DEFAULT_MICROCELL_RADIUS: f64 = 0.002;
pub const DEFAULT_PARALLEL: bool = true;
pub const DEFAULT_MAX_PAIR_COMPARISONS: u64 = 50_000_000;

// --- Analysis ---
pub const DEFAULT_TOP_K_TRAFFIC: usize = 5;
pub const DEFAULT_COMMUNITY_SEED: u64 = 42;
pub const DEFAULT_COMMUNITY_RESOLUTION: f64 = 1.0;
pub const DEFAULT_COMMUNITY_MAX_PASSES: usize = 32;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
