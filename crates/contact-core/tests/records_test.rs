use proptest::prelude::*;

use contact_core::models::{Condition, ObservationTime, PersonRecord};
use contact_core::records::group_by_person;

fn record(person: usize, minute: u32) -> PersonRecord {
    PersonRecord::new(
        format!("P{person}"),
        18.565,
        73.907,
        ObservationTime::from_seconds(minute * 60).unwrap(),
        Condition::Healthy,
    )
}

// --- Compact HHMM times ---

#[test]
fn hhmm_accepts_three_and_four_digits() {
    assert_eq!(
        ObservationTime::from_hhmm("905").unwrap(),
        ObservationTime::from_hms(9, 5, 0).unwrap()
    );
    assert_eq!(
        ObservationTime::from_hhmm("1710").unwrap(),
        ObservationTime::from_hms(17, 10, 0).unwrap()
    );
}

#[test]
fn hhmm_rejects_impossible_clock_values() {
    // Minute 60 shows up in generated data; it is not a clock time.
    assert!(ObservationTime::from_hhmm("1760").is_err());
    assert!(ObservationTime::from_hhmm("2400").is_err());
    assert!(ObservationTime::from_hhmm("17").is_err());
    assert!(ObservationTime::from_hhmm("17a0").is_err());
}

#[test]
fn text_forms_agree() {
    let a: ObservationTime = "17:10".parse().unwrap();
    let b: ObservationTime = "17:10:00".parse().unwrap();
    let c: ObservationTime = "1710".parse().unwrap();
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert!("25:00".parse::<ObservationTime>().is_err());
}

proptest! {
    #[test]
    fn every_clock_minute_parses_from_hhmm(hour in 0u32..24, minute in 0u32..60) {
        let text = format!("{hour}{minute:02}");
        let parsed = ObservationTime::from_hhmm(&text).unwrap();
        prop_assert_eq!(parsed.seconds(), hour * 3600 + minute * 60);
    }

    #[test]
    fn grouping_keeps_every_record_in_time_order(
        pings in prop::collection::vec((0usize..5, 0u32..1440), 0..40)
    ) {
        let records: Vec<PersonRecord> = pings.iter().map(|&(p, m)| record(p, m)).collect();
        let groups = group_by_person(records);

        let total: usize = groups.iter().map(|g| g.records.len()).sum();
        prop_assert_eq!(total, pings.len());

        let mut seen = std::collections::BTreeSet::new();
        for group in &groups {
            prop_assert!(seen.insert(group.person.clone()), "person grouped twice");
            prop_assert!(!group.records.is_empty());
            prop_assert!(group.records.iter().all(|r| r.person == group.person));
            prop_assert!(group.records.windows(2).all(|w| w[0].time <= w[1].time));
        }
    }
}
