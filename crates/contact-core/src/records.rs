//! Partitioning a flat record stream into per-person, time-ordered groups.

use crate::models::{PersonId, PersonRecord};
use crate::types::FxHashMap;

/// All records of one person, ascending by time.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonRecords {
    pub person: PersonId,
    pub records: Vec<PersonRecord>,
}

/// Group records by person in first-appearance order and stable-sort each
/// group by observation time. Records with equal times keep input order.
pub fn group_by_person(records: impl IntoIterator<Item = PersonRecord>) -> Vec<PersonRecords> {
    let mut slots: FxHashMap<PersonId, usize> = FxHashMap::default();
    let mut groups: Vec<PersonRecords> = Vec::new();

    for record in records {
        let slot = *slots.entry(record.person.clone()).or_insert_with(|| {
            groups.push(PersonRecords {
                person: record.person.clone(),
                records: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].records.push(record);
    }

    for group in &mut groups {
        group.records.sort_by_key(|r| r.time);
    }
    groups
}
