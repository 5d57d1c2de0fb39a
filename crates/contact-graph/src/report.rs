//! The breach report: one row per evaluated node pair.

use contact_core::constants::BREACH_REPORT_COLUMNS;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::overlap::{BreachRecord, BreachState, RiskLevel};

/// Counters over a breach report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreachSummary {
    pub evaluated: usize,
    pub breached: usize,
    pub overlapping: usize,
    pub high_risk: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BreachReport {
    records: Vec<BreachRecord>,
}

impl BreachReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, records: impl IntoIterator<Item = BreachRecord>) {
        self.records.extend(records);
    }

    pub fn records(&self) -> &[BreachRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn high_risk(&self) -> impl Iterator<Item = &BreachRecord> {
        self.records.iter().filter(|r| r.risk == RiskLevel::High)
    }

    pub fn in_state(&self, state: BreachState) -> impl Iterator<Item = &BreachRecord> {
        self.records.iter().filter(move |r| r.state() == state)
    }

    pub fn summary(&self) -> BreachSummary {
        self.records
            .iter()
            .fold(BreachSummary::default(), |mut s, r| {
                s.evaluated += 1;
                s.breached += usize::from(r.breached);
                s.overlapping += usize::from(r.time_overlap);
                s.high_risk += usize::from(r.risk == RiskLevel::High);
                s
            })
    }

    pub fn columns() -> &'static [&'static str] {
        &BREACH_REPORT_COLUMNS
    }

    /// Rows as plain values in [`Self::columns`] order.
    pub fn to_rows(&self) -> Vec<Vec<Value>> {
        self.records
            .iter()
            .map(|r| {
                vec![
                    json!(r.person1),
                    json!(r.condition1),
                    json!([r.location1.latitude, r.location1.longitude]),
                    json!(r.entry1.to_string()),
                    json!(r.exit1.to_string()),
                    json!(r.person2),
                    json!(r.condition2),
                    json!([r.location2.latitude, r.location2.longitude]),
                    json!(r.entry2.to_string()),
                    json!(r.exit2.to_string()),
                    json!(r.distance),
                    json!(r.breached),
                    json!(r.risk),
                ]
            })
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.records)
    }
}
