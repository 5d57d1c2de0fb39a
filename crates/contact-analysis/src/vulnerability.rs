//! Mapping communities back to the people who may have been exposed.

use std::collections::BTreeSet;

use contact_core::models::{PersonId, VisitId};
use serde::{Deserialize, Serialize};

use crate::community::Partition;

/// Communities touched by one infected person and everyone appearing in them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VulnerabilityReport {
    pub infected: PersonId,
    pub communities: Vec<BTreeSet<VisitId>>,
    /// Every person in those communities, the infected person included.
    pub people: BTreeSet<PersonId>,
}

impl VulnerabilityReport {
    /// People at risk other than the infected person.
    pub fn exposed_contacts(&self) -> impl Iterator<Item = &PersonId> {
        self.people.iter().filter(move |p| **p != self.infected)
    }

    pub fn is_empty(&self) -> bool {
        self.communities.is_empty()
    }
}

/// Collect every community holding a visit of `infected`, then the distinct
/// people across them. An unknown person yields an empty report.
pub fn vulnerable_people(partition: &Partition, infected: &PersonId) -> VulnerabilityReport {
    let communities: Vec<BTreeSet<VisitId>> = partition
        .communities_of_person(infected)
        .cloned()
        .collect();
    let people = communities
        .iter()
        .flatten()
        .map(|visit| visit.person.clone())
        .collect();
    VulnerabilityReport {
        infected: infected.clone(),
        communities,
        people,
    }
}
