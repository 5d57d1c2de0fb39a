//! Overlap detection: which visits of two people were close enough, for
//! long enough, to matter.
//!
//! Each node pair ends in exactly one [`BreachState`]. States are terminal;
//! a pair is never re-evaluated within a run.

pub mod detector;
pub mod orchestrator;

use contact_core::models::{Condition, Location, ObservationTime, PersonId, VisitId};
use serde::{Deserialize, Serialize};

use crate::graph::BreachEdge;

pub use detector::{classify, detect_pair};
pub use orchestrator::{apply_outcomes, comparison_count, detect_all, person_pairs, run};

/// Transmission risk of a node pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    #[default]
    None,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal classification of one evaluated node pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreachState {
    /// Farther apart than the microcell radius.
    NoBreach,
    /// Close enough, but the dwell intervals never met.
    BreachNoOverlap,
    /// Close and co-present, nobody sick.
    BreachOverlapLowRisk,
    /// Close, co-present, at least one party sick.
    BreachOverlapHighRisk,
}

/// One row of the breach report: the evaluation of a single node pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreachRecord {
    pub person1: PersonId,
    pub visit1: u32,
    pub condition1: Condition,
    pub location1: Location,
    pub entry1: ObservationTime,
    pub exit1: ObservationTime,
    pub person2: PersonId,
    pub visit2: u32,
    pub condition2: Condition,
    pub location2: Location,
    pub entry2: ObservationTime,
    pub exit2: ObservationTime,
    pub distance: f64,
    pub breached: bool,
    pub time_overlap: bool,
    pub risk: RiskLevel,
}

impl BreachRecord {
    pub fn first_visit(&self) -> VisitId {
        VisitId::new(self.person1.clone(), self.visit1)
    }

    pub fn second_visit(&self) -> VisitId {
        VisitId::new(self.person2.clone(), self.visit2)
    }

    pub fn state(&self) -> BreachState {
        match (self.breached, self.time_overlap, self.risk) {
            (false, _, _) => BreachState::NoBreach,
            (true, false, _) => BreachState::BreachNoOverlap,
            (true, true, RiskLevel::None) => BreachState::BreachOverlapLowRisk,
            (true, true, RiskLevel::High) => BreachState::BreachOverlapHighRisk,
        }
    }

    pub fn edge(&self) -> BreachEdge {
        BreachEdge {
            distance: self.distance,
            breached: self.breached,
            time_overlap: self.time_overlap,
            risk: self.risk,
        }
    }
}

/// Graph mutations implied by one person pair, applied later by the
/// single sequential fold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphDelta {
    pub breaches: Vec<(VisitId, VisitId, BreachEdge)>,
    pub infection_starts: Vec<VisitId>,
}

impl GraphDelta {
    pub fn is_empty(&self) -> bool {
        self.breaches.is_empty() && self.infection_starts.is_empty()
    }
}

/// Everything one person pair produced.
#[derive(Debug, Clone, PartialEq)]
pub struct PairOutcome {
    pub first: PersonId,
    pub second: PersonId,
    pub records: Vec<BreachRecord>,
    pub delta: GraphDelta,
}
