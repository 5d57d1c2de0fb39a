//! The composed population graph: every trajectory's undirected projection
//! plus breach edges between visits of different people.

use contact_core::compose_span;
use contact_core::errors::GraphError;
use contact_core::models::{Condition, Location, ObservationTime, VisitId};
use contact_core::types::{FxHashMap, FxHashSet};
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use petgraph::Undirected;
use serde::{Deserialize, Serialize};

use crate::overlap::RiskLevel;
use crate::trajectory::{Population, Trajectory};

/// Node of the composed graph. Flags are write-once: setting a flag that is
/// already set is a no-op.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: VisitId,
    pub condition: Condition,
    pub location: Location,
    pub observed_at: ObservationTime,
    pub breached: bool,
    pub infection_start: bool,
}

/// Attributes of a breach between two visits of different people.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreachEdge {
    pub distance: f64,
    pub breached: bool,
    pub time_overlap: bool,
    pub risk: RiskLevel,
}

impl BreachEdge {
    /// Same evidence, allowing for float noise in the distance.
    fn agrees_with(&self, other: &BreachEdge) -> bool {
        let tolerance = 1e-9 * self.distance.abs().max(1.0);
        self.breached == other.breached
            && self.time_overlap == other.time_overlap
            && self.risk == other.risk
            && (self.distance - other.distance).abs() <= tolerance
    }
}

/// Edge of the composed graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GraphEdge {
    /// Undirected projection of a trajectory step.
    Transition { arrival_time: ObservationTime },
    Breach(BreachEdge),
}

impl GraphEdge {
    pub fn as_breach(&self) -> Option<&BreachEdge> {
        match self {
            Self::Breach(b) => Some(b),
            Self::Transition { .. } => None,
        }
    }
}

/// The underlying undirected graph type.
pub type ContactStableGraph = StableGraph<GraphNode, GraphEdge, Undirected>;

/// Population-wide contact graph with O(1) lookup by visit id.
#[derive(Debug, Clone, Default)]
pub struct ComposedGraph {
    graph: ContactStableGraph,
    node_index: FxHashMap<VisitId, NodeIndex>,
    transitions: FxHashSet<(VisitId, VisitId)>,
    breaches: FxHashMap<(VisitId, VisitId), EdgeIndex>,
}

impl ComposedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Union the undirected projections of every trajectory.
    pub fn compose(population: &Population) -> Self {
        let _span = compose_span!(population.len()).entered();
        let mut composed = Self::new();
        for trajectory in population.trajectories() {
            composed.absorb(trajectory);
        }
        tracing::info!(
            nodes = composed.node_count(),
            edges = composed.edge_count(),
            "composed graph built"
        );
        composed
    }

    /// Add a trajectory's visits and transitions. Visits and transitions
    /// already present are left untouched, so absorbing twice is a no-op.
    pub fn absorb(&mut self, trajectory: &Trajectory) {
        for visit in trajectory.visits() {
            if self.node_index.contains_key(&visit.id) {
                continue;
            }
            let idx = self.graph.add_node(GraphNode {
                id: visit.id.clone(),
                condition: trajectory.condition(),
                location: visit.location,
                observed_at: visit.observed_at,
                breached: visit.breached,
                infection_start: visit.infection_start,
            });
            self.node_index.insert(visit.id.clone(), idx);
        }

        for (from, to, edge) in trajectory.transitions() {
            let a = VisitId::new(trajectory.person().clone(), from);
            let b = VisitId::new(trajectory.person().clone(), to);
            let key = VisitId::pair_key(&a, &b);
            if self.transitions.contains(&key) {
                continue;
            }
            if let (Some(&ia), Some(&ib)) = (self.node_index.get(&a), self.node_index.get(&b)) {
                self.graph.add_edge(
                    ia,
                    ib,
                    GraphEdge::Transition {
                        arrival_time: edge.arrival_time,
                    },
                );
                self.transitions.insert(key);
            }
        }
    }

    /// Insert a breach edge between two visits.
    ///
    /// Returns `Ok(true)` when a new edge was created, `Ok(false)` when an
    /// identical edge already exists. Different evidence for an existing
    /// pair is a [`GraphError::ConflictingBreach`].
    pub fn insert_breach(
        &mut self,
        a: &VisitId,
        b: &VisitId,
        breach: BreachEdge,
    ) -> Result<bool, GraphError> {
        let ia = self.require(a)?;
        let ib = self.require(b)?;
        let key = VisitId::pair_key(a, b);

        if let Some(&existing) = self.breaches.get(&key) {
            let stored = self
                .graph
                .edge_weight(existing)
                .and_then(GraphEdge::as_breach)
                .copied()
                .ok_or_else(|| GraphError::ConflictingBreach {
                    first: key.0.to_string(),
                    second: key.1.to_string(),
                    details: "indexed breach edge is missing".to_string(),
                })?;
            if stored.agrees_with(&breach) {
                return Ok(false);
            }
            return Err(GraphError::ConflictingBreach {
                first: key.0.to_string(),
                second: key.1.to_string(),
                details: format!("stored {stored:?}, new {breach:?}"),
            });
        }

        let edge = self.graph.add_edge(ia, ib, GraphEdge::Breach(breach));
        self.breaches.insert(key, edge);
        Ok(true)
    }

    pub fn mark_breached(&mut self, id: &VisitId) -> Result<(), GraphError> {
        let idx = self.require(id)?;
        if let Some(node) = self.graph.node_weight_mut(idx) {
            node.breached = true;
        }
        Ok(())
    }

    pub fn mark_infection_start(&mut self, id: &VisitId) -> Result<(), GraphError> {
        let idx = self.require(id)?;
        if let Some(node) = self.graph.node_weight_mut(idx) {
            node.infection_start = true;
        }
        Ok(())
    }

    fn require(&self, id: &VisitId) -> Result<NodeIndex, GraphError> {
        self.node_index
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::UnknownVisit {
                visit: id.to_string(),
            })
    }

    // --- Read access ---

    pub fn node(&self, id: &VisitId) -> Option<&GraphNode> {
        self.node_index
            .get(id)
            .and_then(|&idx| self.graph.node_weight(idx))
    }

    pub fn contains(&self, id: &VisitId) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.graph.node_indices().filter_map(|idx| self.graph.node_weight(idx))
    }

    /// Every edge as `(endpoint, endpoint, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (&VisitId, &VisitId, &GraphEdge)> {
        self.graph.edge_references().filter_map(|e| {
            let a = self.graph.node_weight(e.source())?;
            let b = self.graph.node_weight(e.target())?;
            Some((&a.id, &b.id, e.weight()))
        })
    }

    pub fn breach(&self, a: &VisitId, b: &VisitId) -> Option<&BreachEdge> {
        self.breaches
            .get(&VisitId::pair_key(a, b))
            .and_then(|&e| self.graph.edge_weight(e))
            .and_then(GraphEdge::as_breach)
    }

    /// One-hop neighbors of `id`. A neighbor joined by several edges
    /// appears once per edge.
    pub fn neighbors<'a>(&'a self, id: &VisitId) -> impl Iterator<Item = &'a VisitId> + 'a {
        self.node_index
            .get(id)
            .copied()
            .into_iter()
            .flat_map(move |idx| self.graph.neighbors(idx))
            .filter_map(move |n| self.graph.node_weight(n).map(|node| &node.id))
    }

    /// Number of incident edges.
    pub fn degree(&self, id: &VisitId) -> usize {
        self.node_index
            .get(id)
            .map(|&idx| self.graph.edges(idx).count())
            .unwrap_or(0)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn breach_count(&self) -> usize {
        self.breaches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Borrow the petgraph graph for algorithms that need raw access.
    pub fn inner(&self) -> &ContactStableGraph {
        &self.graph
    }
}
