//! Span definitions per pipeline phase.

/// Create a trajectory-building span.
#[macro_export]
macro_rules! trajectory_span {
    ($person:expr, $records:expr) => {
        tracing::debug_span!("contact.trajectory", person = %$person, records = $records)
    };
}

/// Create a population overlap span.
#[macro_export]
macro_rules! overlap_span {
    ($people:expr, $pairs:expr) => {
        tracing::info_span!("contact.overlap", people = $people, pairs = $pairs)
    };
}

/// Create a graph composition span.
#[macro_export]
macro_rules! compose_span {
    ($trajectories:expr) => {
        tracing::info_span!("contact.compose", trajectories = $trajectories)
    };
}

/// Create a population analysis span.
#[macro_export]
macro_rules! analysis_span {
    ($nodes:expr, $edges:expr) => {
        tracing::info_span!("contact.analysis", nodes = $nodes, edges = $edges)
    };
}

/// Create a community detection span.
#[macro_export]
macro_rules! community_span {
    ($nodes:expr, $seed:expr) => {
        tracing::info_span!("contact.community", nodes = $nodes, seed = $seed)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const TRAJECTORY: &str = "contact.trajectory";
    pub const OVERLAP: &str = "contact.overlap";
    pub const COMPOSE: &str = "contact.compose";
    pub const ANALYSIS: &str = "contact.analysis";
    pub const COMMUNITY: &str = "contact.community";
}
