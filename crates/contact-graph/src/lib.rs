//! # contact-graph
//!
//! The spatio-temporal half of the engine. Builds per-person trajectory
//! graphs, compares every pair of people for spatial and temporal overlap,
//! and composes everything into one undirected population graph (`petgraph`).

pub mod context;
pub mod distance;
pub mod graph;
pub mod overlap;
pub mod report;
pub mod trajectory;

pub use context::AnalysisContext;
pub use graph::{BreachEdge, ComposedGraph, GraphEdge, GraphNode, NodeLinkGraph};
pub use overlap::{BreachRecord, BreachState, PairOutcome, RiskLevel};
pub use report::{BreachReport, BreachSummary};
pub use trajectory::{build_population, DwellInterval, Population, Trajectory, VisitNode};
