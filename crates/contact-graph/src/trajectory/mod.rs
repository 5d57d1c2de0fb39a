//! Per-person trajectories: a directed path graph of visits.
//!
//! Node `i` is the `i`-th observation of the person in time order. The edge
//! `i → i+1` carries the arrival time at node `i+1`. A visit's dwell interval
//! is bounded by the arrival time of its incoming edge and the arrival time of
//! its outgoing edge, with two boundary rules:
//!
//! - the first visit has no incoming edge, so it enters at
//!   [`ObservationTime::WINDOW_START`];
//! - the last visit has no outgoing edge, so it exits at its own entry time.
//!
//! These rules under-count overlap at trajectory endpoints. They are kept as a
//! documented approximation.

pub mod population;

use contact_core::errors::{ContactResult, TrajectoryError};
use contact_core::models::{Condition, Location, ObservationTime, PersonId, PersonRecord, VisitId};
use contact_core::trajectory_span;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};

pub use population::{build_population, Population};

/// One observation of a person, as a node of their trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitNode {
    pub id: VisitId,
    pub location: Location,
    pub observed_at: ObservationTime,
    pub breached: bool,
    pub infection_start: bool,
}

/// Directed move from one visit to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionEdge {
    /// Timestamp recorded at the destination visit.
    pub arrival_time: ObservationTime,
}

/// Closed interval a person is assumed to spend at one visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DwellInterval {
    pub entry: ObservationTime,
    pub exit: ObservationTime,
}

impl DwellInterval {
    /// Two intervals overlap when they share at least one instant.
    pub fn overlaps(&self, other: &DwellInterval) -> bool {
        self.entry.max(other.entry) <= self.exit.min(other.exit)
    }
}

/// The ordered visits of one person.
#[derive(Debug, Clone)]
pub struct Trajectory {
    person: PersonId,
    condition: Condition,
    graph: DiGraph<VisitNode, TransitionEdge>,
}

impl Trajectory {
    /// Build a trajectory from one person's records, already sorted by time.
    ///
    /// Fails on an empty record set, on a record filed under another person,
    /// and on records whose condition differs from the first record's.
    pub fn build(person: &PersonId, records: &[PersonRecord]) -> ContactResult<Self> {
        let _span = trajectory_span!(person, records.len()).entered();

        let first = records.first().ok_or_else(|| TrajectoryError::Empty {
            person: person.to_string(),
        })?;
        let condition = first.condition;

        let mut graph = DiGraph::with_capacity(records.len(), records.len().saturating_sub(1));
        let mut previous: Option<NodeIndex> = None;
        for (index, record) in records.iter().enumerate() {
            if &record.person != person {
                return Err(TrajectoryError::ForeignRecord {
                    person: person.to_string(),
                    index,
                    found: record.person.to_string(),
                }
                .into());
            }
            if record.condition != condition {
                return Err(TrajectoryError::MixedCondition {
                    person: person.to_string(),
                    index,
                    expected: condition.to_string(),
                    found: record.condition.to_string(),
                }
                .into());
            }
            let node = graph.add_node(VisitNode {
                id: VisitId::new(person.clone(), index as u32),
                location: record.location,
                observed_at: record.time,
                breached: false,
                infection_start: false,
            });
            if let Some(prev) = previous {
                graph.add_edge(
                    prev,
                    node,
                    TransitionEdge {
                        arrival_time: record.time,
                    },
                );
            }
            previous = Some(node);
        }

        tracing::debug!(person = %person, visits = graph.node_count(), "trajectory built");
        Ok(Self {
            person: person.clone(),
            condition,
            graph,
        })
    }

    pub fn person(&self) -> &PersonId {
        &self.person
    }

    pub fn condition(&self) -> Condition {
        self.condition
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Visits in sequence order.
    pub fn visits(&self) -> impl Iterator<Item = &VisitNode> {
        self.graph.raw_nodes().iter().map(|n| &n.weight)
    }

    pub fn visit(&self, seq: u32) -> Option<&VisitNode> {
        self.graph.node_weight(NodeIndex::new(seq as usize))
    }

    /// Transitions as `(from_seq, to_seq, edge)` in sequence order.
    pub fn transitions(&self) -> impl Iterator<Item = (u32, u32, &TransitionEdge)> {
        self.graph.raw_edges().iter().map(|e| {
            (
                e.source().index() as u32,
                e.target().index() as u32,
                &e.weight,
            )
        })
    }

    /// Dwell interval of visit `seq` under the boundary rules above.
    pub fn dwell_interval(&self, seq: u32) -> Option<DwellInterval> {
        let idx = NodeIndex::new(seq as usize);
        self.graph.node_weight(idx)?;
        let arrival = |direction| {
            self.graph
                .edges_directed(idx, direction)
                .next()
                .map(|e| e.weight().arrival_time)
        };
        let entry = arrival(Direction::Incoming).unwrap_or(ObservationTime::WINDOW_START);
        let exit = arrival(Direction::Outgoing).unwrap_or(entry);
        Some(DwellInterval { entry, exit })
    }

    /// Dwell intervals of every visit, indexed by sequence number.
    pub fn dwell_intervals(&self) -> Vec<DwellInterval> {
        (0..self.len() as u32)
            .filter_map(|seq| self.dwell_interval(seq))
            .collect()
    }

    pub(crate) fn mark_breached(&mut self, seq: u32) {
        if let Some(node) = self.graph.node_weight_mut(NodeIndex::new(seq as usize)) {
            node.breached = true;
        }
    }

    pub(crate) fn mark_infection_start(&mut self, seq: u32) {
        if let Some(node) = self.graph.node_weight_mut(NodeIndex::new(seq as usize)) {
            node.infection_start = true;
        }
    }
}
