//! Time-of-day model for a single observation day.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::errors::RecordError;

const SECONDS_PER_DAY: u32 = 86_400;

/// Seconds elapsed since the start of the observation day.
///
/// Serialized as the plain second count. Deserialization goes through
/// [`ObservationTime::from_seconds`], so out-of-day values are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ObservationTime(u32);

impl ObservationTime {
    /// Start of the observation window. Used as the entry time of a
    /// trajectory's first visit.
    pub const WINDOW_START: ObservationTime = ObservationTime(0);

    pub fn from_seconds(seconds: u32) -> Result<Self, RecordError> {
        if seconds >= SECONDS_PER_DAY {
            return Err(RecordError::InvalidTime {
                value: seconds.to_string(),
                reason: "exceeds one observation day".to_string(),
            });
        }
        Ok(Self(seconds))
    }

    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Result<Self, RecordError> {
        NaiveTime::from_hms_opt(hour, minute, second)
            .map(Self::from)
            .ok_or_else(|| RecordError::InvalidTime {
                value: format!("{hour:02}:{minute:02}:{second:02}"),
                reason: "not a valid clock time".to_string(),
            })
    }

    /// Parse the compact `HHMM` form (`"1710"` is 17:10, `"905"` is 09:05).
    pub fn from_hhmm(value: &str) -> Result<Self, RecordError> {
        let digits = value.trim();
        if !(3..=4).contains(&digits.len()) || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RecordError::InvalidTime {
                value: value.to_string(),
                reason: "expected 3 or 4 digits".to_string(),
            });
        }
        let (hour, minute) = digits.split_at(digits.len() - 2);
        let invalid = |reason: &str| RecordError::InvalidTime {
            value: value.to_string(),
            reason: reason.to_string(),
        };
        let hour: u32 = hour.parse().map_err(|_| invalid("bad hour"))?;
        let minute: u32 = minute.parse().map_err(|_| invalid("bad minute"))?;
        Self::from_hms(hour, minute, 0).map_err(|_| invalid("not a valid clock time"))
    }

    pub fn seconds(&self) -> u32 {
        self.0
    }

    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::from_num_seconds_from_midnight_opt(self.0, 0).unwrap_or(NaiveTime::MIN)
    }
}

impl TryFrom<u32> for ObservationTime {
    type Error = RecordError;

    fn try_from(seconds: u32) -> Result<Self, Self::Error> {
        Self::from_seconds(seconds)
    }
}

impl From<ObservationTime> for u32 {
    fn from(time: ObservationTime) -> Self {
        time.0
    }
}

impl From<NaiveTime> for ObservationTime {
    fn from(time: NaiveTime) -> Self {
        Self(time.num_seconds_from_midnight())
    }
}

impl FromStr for ObservationTime {
    type Err = RecordError;

    /// Accepts `HH:MM:SS`, `HH:MM`, or the compact `HHMM` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.contains(':') {
            return NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
                .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
                .map(Self::from)
                .map_err(|e| RecordError::InvalidTime {
                    value: s.to_string(),
                    reason: e.to_string(),
                });
        }
        Self::from_hhmm(trimmed)
    }
}

impl fmt::Display for ObservationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = (self.0 / 3600, (self.0 / 60) % 60, self.0 % 60);
        write!(f, "{h:02}:{m:02}:{s:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_supported_forms() {
        let expected = ObservationTime::from_hms(17, 10, 0).unwrap();
        assert_eq!("17:10".parse::<ObservationTime>().unwrap(), expected);
        assert_eq!("17:10:00".parse::<ObservationTime>().unwrap(), expected);
        assert_eq!("1710".parse::<ObservationTime>().unwrap(), expected);
        assert_eq!(
            "905".parse::<ObservationTime>().unwrap(),
            ObservationTime::from_hms(9, 5, 0).unwrap()
        );
    }

    #[test]
    fn rejects_impossible_clock_values() {
        // The source generator can emit minute 60.
        assert!(ObservationTime::from_hhmm("1760").is_err());
        assert!(ObservationTime::from_hhmm("2510").is_err());
        assert!(ObservationTime::from_hhmm("17a0").is_err());
        assert!("25:00".parse::<ObservationTime>().is_err());
        assert!(ObservationTime::from_seconds(86_400).is_err());
    }

    #[test]
    fn window_start_precedes_everything() {
        let t = ObservationTime::from_hms(0, 0, 1).unwrap();
        assert!(ObservationTime::WINDOW_START < t);
        assert_eq!(ObservationTime::WINDOW_START.to_string(), "00:00:00");
        assert_eq!(t.to_naive_time(), NaiveTime::from_hms_opt(0, 0, 1).unwrap());
    }

    #[test]
    fn serde_uses_seconds_and_enforces_the_day_bound() {
        let t = ObservationTime::from_hms(17, 10, 0).unwrap();
        assert_eq!(serde_json::to_string(&t).unwrap(), "61800");
        assert_eq!(serde_json::from_str::<ObservationTime>("61800").unwrap(), t);

        let err = serde_json::from_str::<ObservationTime>("90000").unwrap_err();
        assert!(err.to_string().contains("90000"), "got {err}");
    }
}
