//! A single geolocation ping.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Condition, ObservationTime, PersonId};

/// A point on the map. Units follow the configured distance metric:
/// degrees for the planar metric, degrees in / meters out for haversine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// One immutable observation of a person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub person: PersonId,
    pub location: Location,
    /// Informational only; a run covers a single observation day.
    pub observation_date: Option<NaiveDate>,
    pub time: ObservationTime,
    pub condition: Condition,
}

impl PersonRecord {
    pub fn new(
        person: impl Into<PersonId>,
        latitude: f64,
        longitude: f64,
        time: ObservationTime,
        condition: Condition,
    ) -> Self {
        Self {
            person: person.into(),
            location: Location::new(latitude, longitude),
            observation_date: None,
            time,
            condition,
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.observation_date = Some(date);
        self
    }
}
