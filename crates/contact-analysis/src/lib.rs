//! # contact-analysis
//!
//! Read-only analytics over a frozen [`ComposedGraph`](contact_graph::ComposedGraph):
//! high-traffic visits, infection starts, forward exposure, community
//! partitioning, and the mapping from communities back to vulnerable people.
//! [`ContactTracer`] drives the whole pipeline from raw records.

pub mod analyzer;
pub mod community;
pub mod pipeline;
pub mod queries;
pub mod vulnerability;

pub use analyzer::{AnalysisReport, PopulationAnalyzer};
pub use community::{CommunityDetection, Louvain, Partition};
pub use pipeline::{ContactTracer, TraceOutcome};
pub use queries::RankedVisit;
pub use vulnerability::{vulnerable_people, VulnerabilityReport};
