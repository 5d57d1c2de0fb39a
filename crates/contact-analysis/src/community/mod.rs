//! Community detection over the composed graph.
//!
//! Communities group visits that are densely linked by transitions and
//! breaches. The quality measure is modularity with resolution γ:
//!
//! ```text
//! Q = Σ_c [ L_c / m  -  γ (d_c / 2m)² ]
//! ```
//!
//! where `m` is the edge count, `L_c` the edges inside community `c`, and
//! `d_c` the summed degree of its members. Every edge has weight 1.
//!
//! Any detector must return a disjoint cover of every node of the graph;
//! isolated visits come back as singleton communities.

mod louvain;
mod partition;

use contact_graph::ComposedGraph;

pub use louvain::Louvain;
pub use partition::Partition;

/// A partitioning strategy over the composed graph.
pub trait CommunityDetection {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Partition every node of `graph`.
    fn detect(&self, graph: &ComposedGraph) -> Partition;
}
