//! Point queries over the composed graph.

use contact_core::models::{Location, VisitId};
use contact_core::types::FxHashSet;
use contact_graph::ComposedGraph;
use serde::{Deserialize, Serialize};

/// A visit ranked by how many edges touch it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedVisit {
    pub visit: VisitId,
    pub location: Location,
    pub degree: usize,
}

/// Top-`k` visits by degree, ties broken by visit id. Visits without edges
/// are not ranked. Returns fewer than `k` when fewer exist.
pub fn high_traffic(graph: &ComposedGraph, k: usize) -> Vec<RankedVisit> {
    let mut ranked: Vec<RankedVisit> = graph
        .nodes()
        .filter_map(|node| {
            let degree = graph.degree(&node.id);
            (degree > 0).then(|| RankedVisit {
                visit: node.id.clone(),
                location: node.location,
                degree,
            })
        })
        .collect();
    ranked.sort_by(|a, b| b.degree.cmp(&a.degree).then_with(|| a.visit.cmp(&b.visit)));
    ranked.truncate(k);
    ranked
}

/// Every visit flagged as an infection start, sorted.
pub fn infection_starts(graph: &ComposedGraph) -> Vec<VisitId> {
    let mut starts: Vec<VisitId> = graph
        .nodes()
        .filter(|node| node.infection_start)
        .map(|node| node.id.clone())
        .collect();
    starts.sort();
    starts
}

/// One-hop neighbors of every infection start, deduplicated and sorted.
///
/// Infection starts adjacent to each other appear in the result.
pub fn forward_exposure(graph: &ComposedGraph) -> Vec<VisitId> {
    let mut seen: FxHashSet<&VisitId> = FxHashSet::default();
    for node in graph.nodes().filter(|node| node.infection_start) {
        seen.extend(graph.neighbors(&node.id));
    }
    let mut exposed: Vec<VisitId> = seen.into_iter().cloned().collect();
    exposed.sort();
    exposed
}
