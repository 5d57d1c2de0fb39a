//! The Population Analyzer: every read-only query over a frozen composed
//! graph, bundled into one report.

use std::collections::BTreeSet;

use contact_core::analysis_span;
use contact_core::models::{PersonId, VisitId};
use contact_graph::{AnalysisContext, ComposedGraph};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::community::{CommunityDetection, Louvain, Partition};
use crate::queries::{self, RankedVisit};
use crate::vulnerability::{vulnerable_people, VulnerabilityReport};

/// Results of every analyzer query for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub high_traffic: Vec<RankedVisit>,
    pub infection_starts: Vec<VisitId>,
    pub forward_exposure: Vec<VisitId>,
    pub communities: Vec<BTreeSet<VisitId>>,
    pub modularity: f64,
    /// One entry per sick person, sorted by person.
    pub vulnerability: Vec<VulnerabilityReport>,
}

impl AnalysisReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub struct PopulationAnalyzer<D = Louvain> {
    top_k: usize,
    resolution: f64,
    detector: D,
}

impl PopulationAnalyzer<Louvain> {
    pub fn new(ctx: &AnalysisContext) -> Self {
        let detector = Louvain::new(ctx.community_seed)
            .with_resolution(ctx.community_resolution)
            .with_max_passes(ctx.community_max_passes);
        Self {
            top_k: ctx.top_k_traffic,
            resolution: ctx.community_resolution,
            detector,
        }
    }
}

impl<D: CommunityDetection> PopulationAnalyzer<D> {
    /// Use a different community detector.
    pub fn with_detector<E: CommunityDetection>(self, detector: E) -> PopulationAnalyzer<E> {
        PopulationAnalyzer {
            top_k: self.top_k,
            resolution: self.resolution,
            detector,
        }
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    pub fn high_traffic(&self, graph: &ComposedGraph) -> Vec<RankedVisit> {
        queries::high_traffic(graph, self.top_k)
    }

    pub fn infection_starts(&self, graph: &ComposedGraph) -> Vec<VisitId> {
        queries::infection_starts(graph)
    }

    pub fn forward_exposure(&self, graph: &ComposedGraph) -> Vec<VisitId> {
        queries::forward_exposure(graph)
    }

    pub fn communities(&self, graph: &ComposedGraph) -> Partition {
        self.detector.detect(graph)
    }

    pub fn vulnerable_people(&self, partition: &Partition, infected: &PersonId) -> VulnerabilityReport {
        vulnerable_people(partition, infected)
    }

    /// Run every query. Sick people are read off the graph's nodes.
    pub fn analyze(&self, graph: &ComposedGraph) -> AnalysisReport {
        let _span = analysis_span!(graph.node_count(), graph.edge_count()).entered();

        let partition = self.communities(graph);
        let modularity = partition.modularity(graph, self.resolution);

        let sick: BTreeSet<&PersonId> = graph
            .nodes()
            .filter(|n| n.condition.is_sick())
            .map(|n| &n.id.person)
            .collect();
        let vulnerability: Vec<VulnerabilityReport> = sick
            .into_iter()
            .map(|person| vulnerable_people(&partition, person))
            .collect();

        let report = AnalysisReport {
            high_traffic: self.high_traffic(graph),
            infection_starts: self.infection_starts(graph),
            forward_exposure: self.forward_exposure(graph),
            communities: partition.into_communities(),
            modularity,
            vulnerability,
        };

        info!(
            detector = self.detector.name(),
            communities = report.communities.len(),
            modularity = report.modularity,
            infection_starts = report.infection_starts.len(),
            exposed = report.forward_exposure.len(),
            "population analyzed"
        );
        report
    }
}
