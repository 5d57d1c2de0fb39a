//! Aggregate graph: composition of all trajectories plus breach overlays.

pub mod composed;
pub mod export;

pub use composed::{BreachEdge, ComposedGraph, ContactStableGraph, GraphEdge, GraphNode};
pub use export::{NodeLinkEdge, NodeLinkGraph, NodeLinkNode};
