//! Canonical populations.
//!
//! Planar coordinates in degrees; the default microcell radius is 0.002.

use contact_core::models::{Condition, PersonRecord};

use crate::ping;

use Condition::{Healthy, Sick};

/// Two people, one ping each, 0.001 apart. One sick, one healthy.
/// Single-ping intervals both collapse to the window start, so they overlap.
pub fn single_ping_pair() -> Vec<PersonRecord> {
    vec![
        ping("SICKONE", 18.5650, 73.9080, "17:10", Sick),
        ping("WELLONE", 18.5650, 73.9090, "17:40", Healthy),
    ]
}

/// Two people 5.0 apart.
pub fn far_apart_pair() -> Vec<PersonRecord> {
    vec![
        ping("FARONE", 18.5650, 73.9080, "17:10", Sick),
        ping("FARTWO", 23.5650, 73.9080, "17:10", Healthy),
    ]
}

/// One person, three pings five minutes apart.
pub fn three_pings() -> Vec<PersonRecord> {
    vec![
        ping("TRIPLE", 18.5650, 73.9080, "10:00", Healthy),
        ping("TRIPLE", 18.5651, 73.9081, "10:05", Healthy),
        ping("TRIPLE", 18.5652, 73.9082, "10:10", Healthy),
    ]
}

/// Five people, one sick. Everyone later stands on the same spot, but the
/// sick person leaves before anyone else arrives.
///
/// First visits enter at the window start, so each healthy person's first
/// ping is placed far away; otherwise it would overlap the sick person's
/// first visit by construction.
pub fn no_temporal_overlap() -> Vec<PersonRecord> {
    let mut records = vec![
        ping("SICKEARLY", 10.0, 10.0, "08:00", Sick),
        ping("SICKEARLY", 10.0, 10.0, "08:10", Sick),
    ];
    for (k, person) in ["LATEA", "LATEB", "LATEC", "LATED"].into_iter().enumerate() {
        records.push(ping(person, 20.0 + k as f64, 20.0, "07:00", Healthy));
        records.push(ping(person, 10.0, 10.0, "09:00", Healthy));
        records.push(ping(person, 10.0, 10.0, "09:30", Healthy));
    }
    records
}

/// Three people meeting around one spot (one sick) and a fourth who never
/// comes near anyone.
pub fn isolated_person() -> Vec<PersonRecord> {
    vec![
        ping("ALPHA", 18.5650, 73.9080, "12:00", Sick),
        ping("ALPHA", 18.5650, 73.9080, "12:30", Sick),
        ping("BRAVO", 18.5655, 73.9080, "12:10", Healthy),
        ping("BRAVO", 18.5650, 73.9080, "12:40", Healthy),
        ping("CHARLIE", 18.5650, 73.9085, "12:05", Healthy),
        ping("CHARLIE", 18.6500, 73.9900, "13:00", Healthy),
        ping("DELTA", 19.5000, 74.5000, "12:00", Healthy),
        ping("DELTA", 19.5100, 74.5100, "12:30", Healthy),
    ]
}

/// A deterministic grid population for load tests: `people` people with
/// `pings` pings each, every fifth person sick.
pub fn grid_population(people: usize, pings: usize) -> Vec<PersonRecord> {
    let mut records = Vec::with_capacity(people * pings);
    for p in 0..people {
        let name = format!("P{p:05}");
        let condition = if p % 5 == 0 { Sick } else { Healthy };
        for i in 0..pings {
            let lat = 18.5650 + ((p * 7 + i * 3) % 40) as f64 * 0.0005;
            let lon = 73.9071 + ((p * 11 + i * 5) % 40) as f64 * 0.0005;
            let minutes = 17 * 60 + ((i * 13 + p) % 240);
            let time = format!("{:02}:{:02}", minutes / 60, minutes % 60);
            records.push(ping(&name, lat, lon, &time, condition));
        }
    }
    records
}
