//! Louvain modularity optimization (Blondel et al. 2008).
//!
//! Two phases repeat until no node moves:
//! 1. Local moving: visit nodes in a seeded random order and move each into
//!    the neighboring community with the largest modularity gain.
//! 2. Aggregation: collapse each community into one node, keeping internal
//!    weight as a self-loop, and run phase 1 on the smaller graph.
//!
//! Nodes only ever move toward neighbors, so a community never spans two
//! connected components and isolated visits stay singletons.

use std::collections::BTreeSet;

use contact_core::community_span;
use contact_core::config::defaults;
use contact_core::models::VisitId;
use contact_core::types::FxHashMap;
use contact_graph::ComposedGraph;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use super::{CommunityDetection, Partition};

/// Minimum gain for a move; keeps float noise from causing oscillation.
const MIN_GAIN: f64 = 1e-12;

/// Seeded Louvain detector. The same seed on the same graph yields the same
/// partition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Louvain {
    pub resolution: f64,
    pub seed: u64,
    /// Upper bound on local-moving sweeps per level, and on levels.
    pub max_passes: usize,
}

impl Louvain {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    pub fn with_resolution(mut self, resolution: f64) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes.max(1);
        self
    }
}

impl Default for Louvain {
    fn default() -> Self {
        Self {
            resolution: defaults::DEFAULT_COMMUNITY_RESOLUTION,
            seed: defaults::DEFAULT_COMMUNITY_SEED,
            max_passes: defaults::DEFAULT_COMMUNITY_MAX_PASSES,
        }
    }
}

impl CommunityDetection for Louvain {
    fn name(&self) -> &'static str {
        "louvain"
    }

    fn detect(&self, graph: &ComposedGraph) -> Partition {
        let _span = community_span!(graph.node_count(), self.seed).entered();

        let (ids, level) = WeightedGraph::from_composed(graph);
        let mut membership: Vec<usize> = (0..ids.len()).collect();

        if level.total_weight() > 0.0 {
            let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
            let mut current = level;
            for depth in 0..self.max_passes.max(1) {
                let assignment = self.local_moving(&current, &mut rng);
                let (renumbered, count) = renumber(&assignment);
                if count == current.len() {
                    break;
                }
                for m in membership.iter_mut() {
                    *m = renumbered[*m];
                }
                debug!(level = depth, communities = count, "louvain level aggregated");
                current = current.aggregate(&renumbered, count);
            }
        }

        let mut groups: Vec<BTreeSet<VisitId>> = Vec::new();
        for (id, &community) in ids.into_iter().zip(&membership) {
            if community >= groups.len() {
                groups.resize_with(community + 1, BTreeSet::new);
            }
            groups[community].insert(id);
        }
        let partition = Partition::from_groups(groups);
        debug!(communities = partition.len(), "louvain finished");
        partition
    }
}

impl Louvain {
    /// Phase 1 on one level. Returns a community label per node.
    fn local_moving(&self, g: &WeightedGraph, rng: &mut ChaCha8Rng) -> Vec<usize> {
        let n = g.len();
        let two_m = g.total_weight();
        let degree: Vec<f64> = (0..n).map(|i| g.degree(i)).collect();
        let mut community: Vec<usize> = (0..n).collect();
        let mut total: Vec<f64> = degree.clone();

        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(rng);

        for _ in 0..self.max_passes.max(1) {
            let mut moved = false;
            for &i in &order {
                let own = community[i];
                let k_i = degree[i];

                let mut links: FxHashMap<usize, f64> = FxHashMap::default();
                for &(j, w) in &g.adjacency[i] {
                    *links.entry(community[j]).or_insert(0.0) += w;
                }

                total[own] -= k_i;
                let gain = |c: usize, w: f64| w - self.resolution * total[c] * k_i / two_m;

                let mut best = own;
                let mut best_gain = gain(own, links.get(&own).copied().unwrap_or(0.0));
                let mut candidates: Vec<(usize, f64)> = links.into_iter().collect();
                candidates.sort_by_key(|&(c, _)| c);
                for (c, w) in candidates {
                    let g_c = gain(c, w);
                    if g_c > best_gain + MIN_GAIN {
                        best = c;
                        best_gain = g_c;
                    }
                }

                total[best] += k_i;
                if best != own {
                    community[i] = best;
                    moved = true;
                }
            }
            if !moved {
                break;
            }
        }
        community
    }
}

/// Map arbitrary labels onto `0..count` in first-seen order.
fn renumber(labels: &[usize]) -> (Vec<usize>, usize) {
    let mut mapping: FxHashMap<usize, usize> = FxHashMap::default();
    let renumbered = labels
        .iter()
        .map(|label| {
            let next = mapping.len();
            *mapping.entry(*label).or_insert(next)
        })
        .collect();
    (renumbered, mapping.len())
}

/// Compact weighted undirected graph for one Louvain level.
#[derive(Debug, Clone)]
struct WeightedGraph {
    /// Neighbor lists without self-loops; each edge appears on both sides.
    adjacency: Vec<Vec<(usize, f64)>>,
    self_loops: Vec<f64>,
}

impl WeightedGraph {
    /// Index nodes by sorted visit id so the result does not depend on the
    /// graph's internal storage order.
    fn from_composed(graph: &ComposedGraph) -> (Vec<VisitId>, Self) {
        let mut ids: Vec<VisitId> = graph.nodes().map(|n| n.id.clone()).collect();
        ids.sort();
        let position: FxHashMap<&VisitId, usize> =
            ids.iter().enumerate().map(|(i, id)| (id, i)).collect();

        let mut maps: Vec<FxHashMap<usize, f64>> = vec![FxHashMap::default(); ids.len()];
        let mut self_loops = vec![0.0; ids.len()];
        for (a, b, _) in graph.edges() {
            let (Some(&i), Some(&j)) = (position.get(a), position.get(b)) else {
                continue;
            };
            if i == j {
                self_loops[i] += 1.0;
            } else {
                *maps[i].entry(j).or_insert(0.0) += 1.0;
                *maps[j].entry(i).or_insert(0.0) += 1.0;
            }
        }

        let level = Self {
            adjacency: maps.into_iter().map(sorted_neighbors).collect(),
            self_loops,
        };
        (ids, level)
    }

    fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Weighted degree; a self-loop counts twice.
    fn degree(&self, i: usize) -> f64 {
        self.adjacency[i].iter().map(|&(_, w)| w).sum::<f64>() + 2.0 * self.self_loops[i]
    }

    /// Sum of all degrees, i.e. twice the total edge weight.
    fn total_weight(&self) -> f64 {
        (0..self.len()).map(|i| self.degree(i)).sum()
    }

    /// Collapse nodes into their communities.
    fn aggregate(&self, community: &[usize], count: usize) -> Self {
        let mut maps: Vec<FxHashMap<usize, f64>> = vec![FxHashMap::default(); count];
        let mut self_loops = vec![0.0; count];
        for (i, neighbors) in self.adjacency.iter().enumerate() {
            let ci = community[i];
            self_loops[ci] += self.self_loops[i];
            for &(j, w) in neighbors {
                let cj = community[j];
                if ci == cj {
                    // Seen once from each endpoint.
                    self_loops[ci] += w / 2.0;
                } else {
                    *maps[ci].entry(cj).or_insert(0.0) += w;
                }
            }
        }
        Self {
            adjacency: maps.into_iter().map(sorted_neighbors).collect(),
            self_loops,
        }
    }
}

fn sorted_neighbors(map: FxHashMap<usize, f64>) -> Vec<(usize, f64)> {
    let mut neighbors: Vec<(usize, f64)> = map.into_iter().collect();
    neighbors.sort_by_key(|&(j, _)| j);
    neighbors
}
