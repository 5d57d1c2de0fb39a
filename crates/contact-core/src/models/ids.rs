//! Structured identifiers for people and their visits.
//!
//! A `VisitId` is the composite key `(person, sequence_index)`. Equality,
//! ordering and hashing are defined on the tuple, never on a rendered label.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Identifier of one individual in the observed population.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(Arc<str>);

impl PersonId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PersonId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PersonId {
    fn from(id: String) -> Self {
        Self(Arc::from(id))
    }
}

/// Identifier of one visit: the `seq`-th observation of `person`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VisitId {
    pub person: PersonId,
    pub seq: u32,
}

impl VisitId {
    pub fn new(person: PersonId, seq: u32) -> Self {
        Self { person, seq }
    }

    /// Canonical unordered key for a pair of visits (smaller id first).
    pub fn pair_key(a: &VisitId, b: &VisitId) -> (VisitId, VisitId) {
        if a <= b {
            (a.clone(), b.clone())
        } else {
            (b.clone(), a.clone())
        }
    }
}

impl fmt::Display for VisitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.person, self.seq)
    }
}
