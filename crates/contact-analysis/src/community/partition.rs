use std::collections::BTreeSet;

use contact_core::models::{PersonId, VisitId};
use contact_core::types::FxHashMap;
use contact_graph::ComposedGraph;
use serde::Serialize;

/// A disjoint cover of the composed graph's visits.
///
/// Communities are ordered by their smallest member, so two partitions with
/// the same grouping compare equal.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Partition {
    communities: Vec<BTreeSet<VisitId>>,
    #[serde(skip)]
    membership: FxHashMap<VisitId, usize>,
}

impl Partition {
    /// Build from arbitrary groups. Empty groups are dropped.
    pub fn from_groups(groups: impl IntoIterator<Item = BTreeSet<VisitId>>) -> Self {
        let mut communities: Vec<BTreeSet<VisitId>> =
            groups.into_iter().filter(|g| !g.is_empty()).collect();
        communities.sort_by(|a, b| a.first().cmp(&b.first()));

        let mut membership = FxHashMap::default();
        for (index, community) in communities.iter().enumerate() {
            for visit in community {
                membership.insert(visit.clone(), index);
            }
        }
        Self {
            communities,
            membership,
        }
    }

    pub fn communities(&self) -> &[BTreeSet<VisitId>] {
        &self.communities
    }

    pub fn into_communities(self) -> Vec<BTreeSet<VisitId>> {
        self.communities
    }

    /// Index of the community holding `visit`.
    pub fn community_of(&self, visit: &VisitId) -> Option<usize> {
        self.membership.get(visit).copied()
    }

    pub fn len(&self) -> usize {
        self.communities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.communities.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.communities.iter().map(BTreeSet::len).sum()
    }

    /// Communities holding at least one visit of `person`.
    pub fn communities_of_person<'a>(
        &'a self,
        person: &'a PersonId,
    ) -> impl Iterator<Item = &'a BTreeSet<VisitId>> + 'a {
        self.communities
            .iter()
            .filter(move |c| c.iter().any(|v| &v.person == person))
    }

    /// Modularity of this partition over `graph` at the given resolution.
    /// A graph without edges scores 0.
    pub fn modularity(&self, graph: &ComposedGraph, resolution: f64) -> f64 {
        let m = graph.edge_count() as f64;
        if m == 0.0 {
            return 0.0;
        }

        let mut internal = vec![0.0_f64; self.communities.len()];
        let mut degree = vec![0.0_f64; self.communities.len()];

        for (a, b, _) in graph.edges() {
            if let (Some(ca), Some(cb)) = (self.community_of(a), self.community_of(b)) {
                if ca == cb {
                    internal[ca] += 1.0;
                }
            }
        }
        for node in graph.nodes() {
            if let Some(c) = self.community_of(&node.id) {
                degree[c] += graph.degree(&node.id) as f64;
            }
        }

        internal
            .iter()
            .zip(&degree)
            .map(|(l, d)| l / m - resolution * (d / (2.0 * m)).powi(2))
            .sum()
    }
}
