//! The set of all trajectories in one run.

use contact_core::errors::{ContactError, ContactResult, TrajectoryError};
use contact_core::models::PersonId;
use contact_core::records::PersonRecords;
use contact_core::types::FxHashMap;
use tracing::{info, warn};

use super::Trajectory;

/// All trajectories of a run, addressable by person.
#[derive(Debug, Clone, Default)]
pub struct Population {
    trajectories: Vec<Trajectory>,
    index: FxHashMap<PersonId, usize>,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a trajectory. A second trajectory for the same person replaces
    /// the first, with a warning.
    pub fn insert(&mut self, trajectory: Trajectory) {
        match self.index.get(trajectory.person()) {
            Some(&slot) => {
                warn!(
                    person = %trajectory.person(),
                    dropped_visits = self.trajectories[slot].len(),
                    "replacing existing trajectory"
                );
                self.trajectories[slot] = trajectory;
            }
            None => {
                self.index
                    .insert(trajectory.person().clone(), self.trajectories.len());
                self.trajectories.push(trajectory);
            }
        }
    }

    pub fn trajectories(&self) -> &[Trajectory] {
        &self.trajectories
    }

    pub fn get(&self, person: &PersonId) -> Option<&Trajectory> {
        self.index.get(person).map(|&i| &self.trajectories[i])
    }

    pub(crate) fn get_mut(&mut self, person: &PersonId) -> Option<&mut Trajectory> {
        self.index.get(person).map(|&i| &mut self.trajectories[i])
    }

    pub fn len(&self) -> usize {
        self.trajectories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trajectories.is_empty()
    }

    pub fn total_visits(&self) -> usize {
        self.trajectories.iter().map(Trajectory::len).sum()
    }
}

impl FromIterator<Trajectory> for Population {
    fn from_iter<I: IntoIterator<Item = Trajectory>>(iter: I) -> Self {
        let mut population = Population::new();
        for trajectory in iter {
            population.insert(trajectory);
        }
        population
    }
}

/// Build one trajectory per person group.
///
/// Groups without records are skipped with a warning; every other
/// trajectory error aborts the run, as does a second group for a person
/// already built.
pub fn build_population(groups: &[PersonRecords]) -> ContactResult<Population> {
    let mut population = Population::new();
    let mut skipped = 0usize;
    for group in groups {
        if population.get(&group.person).is_some() {
            return Err(TrajectoryError::DuplicatePerson {
                person: group.person.to_string(),
            }
            .into());
        }
        match Trajectory::build(&group.person, &group.records) {
            Ok(trajectory) => population.insert(trajectory),
            Err(ContactError::Trajectory(TrajectoryError::Empty { person })) => {
                warn!(person = %person, "skipping person with no records");
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }
    info!(
        people = population.len(),
        visits = population.total_visits(),
        skipped,
        "population built"
    );
    Ok(population)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contact_core::models::{Condition, ObservationTime, PersonRecord};

    fn group(person: &str, n: u32) -> PersonRecords {
        PersonRecords {
            person: PersonId::new(person),
            records: (0..n)
                .map(|i| {
                    PersonRecord::new(
                        person,
                        1.0,
                        1.0,
                        ObservationTime::from_seconds(60 * i).unwrap(),
                        Condition::Healthy,
                    )
                })
                .collect(),
        }
    }

    #[test]
    fn empty_groups_are_skipped() {
        let population = build_population(&[group("a", 2), group("empty", 0), group("b", 1)]).unwrap();
        assert_eq!(population.len(), 2);
        assert!(population.get(&PersonId::new("empty")).is_none());
        assert_eq!(population.total_visits(), 3);
    }

    #[test]
    fn mixed_condition_aborts() {
        let mut bad = group("bad", 2);
        bad.records[1].condition = Condition::Sick;
        assert!(build_population(&[group("a", 1), bad]).is_err());
    }

    #[test]
    fn second_group_for_a_person_aborts() {
        let err = build_population(&[group("a", 2), group("b", 1), group("a", 3)]).unwrap_err();
        assert!(matches!(
            err,
            ContactError::Trajectory(TrajectoryError::DuplicatePerson { ref person }) if person == "a"
        ));
    }

    #[test]
    fn insert_replaces_same_person() {
        let first = Trajectory::build(&PersonId::new("a"), &group("a", 2).records).unwrap();
        let second = Trajectory::build(&PersonId::new("a"), &group("a", 3).records).unwrap();
        let population: Population = [first, second].into_iter().collect();
        assert_eq!(population.len(), 1);
        assert_eq!(population.total_visits(), 3);
    }

    #[test]
    fn no_groups_is_an_empty_population() {
        let population = build_population(&[]).unwrap();
        assert!(population.is_empty());
    }
}
