//! Property tests for overlap detection: symmetry, the inclusive radius,
//! risk rules, dwell-interval chaining, and idempotent graph composition.

use proptest::prelude::*;

use contact_core::config::DistanceMetric;
use contact_core::models::{Condition, Location, ObservationTime, PersonId, PersonRecord};
use contact_graph::distance::distance;
use contact_graph::overlap::{self, classify, detect_pair};
use contact_graph::{AnalysisContext, ComposedGraph, DwellInterval, Population, RiskLevel, Trajectory};

fn trajectory(person: &str, condition: Condition, pings: &[(f64, f64, u32)]) -> Trajectory {
    let mut records: Vec<PersonRecord> = pings
        .iter()
        .map(|&(lat, lon, minute)| {
            PersonRecord::new(
                person,
                lat,
                lon,
                ObservationTime::from_seconds(minute * 60).unwrap(),
                condition,
            )
        })
        .collect();
    records.sort_by_key(|r| r.time);
    Trajectory::build(&PersonId::new(person), &records).unwrap()
}

fn condition_strategy() -> impl Strategy<Value = Condition> {
    prop_oneof![Just(Condition::Healthy), Just(Condition::Sick)]
}

// Pings inside a 0.01-degree square so breaches are common at radius 0.002.
fn pings_strategy() -> impl Strategy<Value = Vec<(f64, f64, u32)>> {
    prop::collection::vec((0.0_f64..0.01, 0.0_f64..0.01, 0u32..1440), 1..6)
}

fn interval_strategy() -> impl Strategy<Value = DwellInterval> {
    (0u32..86_400, 0u32..86_400).prop_map(|(a, b)| DwellInterval {
        entry: ObservationTime::from_seconds(a.min(b)).unwrap(),
        exit: ObservationTime::from_seconds(a.max(b)).unwrap(),
    })
}

// =============================================================================
// Swapping the pair order mirrors every row
// =============================================================================
proptest! {
    #[test]
    fn detection_is_symmetric(
        pings_a in pings_strategy(),
        pings_b in pings_strategy(),
        cond_a in condition_strategy(),
        cond_b in condition_strategy(),
    ) {
        let ctx = AnalysisContext::with_radius(0.002).unwrap();
        let a = trajectory("PA", cond_a, &pings_a);
        let b = trajectory("PB", cond_b, &pings_b);

        let ab = detect_pair(&ctx, &a, &b);
        let ba = detect_pair(&ctx, &b, &a);
        prop_assert_eq!(ab.records.len(), ba.records.len());

        for row in &ab.records {
            let mirrored = ba
                .records
                .iter()
                .find(|m| m.visit1 == row.visit2 && m.visit2 == row.visit1);
            prop_assert!(mirrored.is_some());
            let mirrored = mirrored.unwrap();
            prop_assert_eq!(mirrored.breached, row.breached);
            prop_assert_eq!(mirrored.time_overlap, row.time_overlap);
            prop_assert_eq!(mirrored.risk, row.risk);
        }

        let mut starts_ab = ab.delta.infection_starts.clone();
        let mut starts_ba = ba.delta.infection_starts.clone();
        starts_ab.sort();
        starts_ba.sort();
        prop_assert_eq!(starts_ab, starts_ba);
        prop_assert_eq!(ab.delta.breaches.len(), ba.delta.breaches.len());
    }
}

// =============================================================================
// The radius is inclusive
// =============================================================================
proptest! {
    #[test]
    fn distance_equal_to_radius_breaches(
        lat_a in -60.0_f64..60.0, lon_a in -170.0_f64..170.0,
        dlat in -0.01_f64..0.01, dlon in -0.01_f64..0.01,
    ) {
        let a = Location::new(lat_a, lon_a);
        let b = Location::new(lat_a + dlat, lon_a + dlon);
        let d = distance(DistanceMetric::Planar, a, b);
        prop_assume!(d > 1e-9);

        let ctx = AnalysisContext::with_radius(d).unwrap();
        let pa = trajectory_at("PA", a);
        let pb = trajectory_at("PB", b);
        let outcome = detect_pair(&ctx, &pa, &pb);
        prop_assert!(outcome.records[0].breached);

        let tighter = AnalysisContext::with_radius(d * (1.0 - 1e-6)).unwrap();
        let outcome = detect_pair(&tighter, &pa, &pb);
        prop_assert!(!outcome.records[0].breached);
        prop_assert!(outcome.delta.breaches.is_empty());
    }
}

fn trajectory_at(person: &str, location: Location) -> Trajectory {
    let record = PersonRecord::new(
        person,
        location.latitude,
        location.longitude,
        ObservationTime::from_hms(12, 0, 0).unwrap(),
        Condition::Healthy,
    );
    Trajectory::build(&PersonId::new(person), &[record]).unwrap()
}

// =============================================================================
// Risk is high exactly when breached, overlapping, and someone is sick
// =============================================================================
proptest! {
    #[test]
    fn risk_follows_the_classification_rule(
        d in 0.0_f64..0.004,
        ia in interval_strategy(),
        ib in interval_strategy(),
        cond_a in condition_strategy(),
        cond_b in condition_strategy(),
    ) {
        let edge = classify(d, 0.002, &ia, &ib, cond_a, cond_b);
        let expected_high =
            d <= 0.002 && ia.overlaps(&ib) && (cond_a.is_sick() || cond_b.is_sick());
        prop_assert_eq!(edge.risk == RiskLevel::High, expected_high);
        prop_assert!(!edge.time_overlap || edge.breached);
    }

    #[test]
    fn sickness_never_lowers_risk(
        d in 0.0_f64..0.004,
        ia in interval_strategy(),
        ib in interval_strategy(),
        cond_b in condition_strategy(),
    ) {
        let healthy = classify(d, 0.002, &ia, &ib, Condition::Healthy, cond_b);
        let sick = classify(d, 0.002, &ia, &ib, Condition::Sick, cond_b);
        if healthy.risk == RiskLevel::High {
            prop_assert_eq!(sick.risk, RiskLevel::High);
        }
        prop_assert_eq!(healthy.breached, sick.breached);
        prop_assert_eq!(healthy.time_overlap, sick.time_overlap);
    }

    #[test]
    fn infection_starts_land_on_healthy_visits_only(
        pings_a in pings_strategy(),
        pings_b in pings_strategy(),
        cond_a in condition_strategy(),
        cond_b in condition_strategy(),
    ) {
        let ctx = AnalysisContext::with_radius(0.002).unwrap();
        let a = trajectory("PA", cond_a, &pings_a);
        let b = trajectory("PB", cond_b, &pings_b);
        let outcome = detect_pair(&ctx, &a, &b);

        for visit in &outcome.delta.infection_starts {
            let condition = if visit.person == *a.person() { cond_a } else { cond_b };
            prop_assert_eq!(condition, Condition::Healthy);
        }
        if cond_a.is_sick() && cond_b.is_sick() {
            prop_assert!(outcome.delta.infection_starts.is_empty());
        }
    }
}

// =============================================================================
// Dwell intervals chain through the trajectory
// =============================================================================
proptest! {
    #[test]
    fn dwell_intervals_chain(pings in pings_strategy()) {
        let t = trajectory("PA", Condition::Healthy, &pings);
        let intervals = t.dwell_intervals();
        prop_assert_eq!(intervals.len(), t.len());
        prop_assert_eq!(intervals[0].entry, ObservationTime::WINDOW_START);
        for w in intervals.windows(2) {
            prop_assert_eq!(w[0].exit, w[1].entry);
        }
        for interval in &intervals {
            prop_assert!(interval.entry <= interval.exit);
        }
        let last = intervals[intervals.len() - 1];
        prop_assert_eq!(last.exit, last.entry);
    }
}

// =============================================================================
// Composition is idempotent over arbitrary populations
// =============================================================================
fn population_strategy() -> impl Strategy<Value = Population> {
    prop::collection::vec((condition_strategy(), pings_strategy()), 1..5).prop_map(|people| {
        people
            .iter()
            .enumerate()
            .map(|(i, (condition, pings))| trajectory(&format!("P{i}"), *condition, pings))
            .collect()
    })
}

proptest! {
    #[test]
    fn absorbing_the_population_again_changes_nothing(population in population_strategy()) {
        let ctx = AnalysisContext::with_radius(0.002).unwrap();

        let mut once_population = population.clone();
        let mut once = ComposedGraph::compose(&once_population);
        let report = overlap::run(&ctx, &mut once_population, &mut once).unwrap();

        let mut twice_population = population.clone();
        let mut twice = ComposedGraph::compose(&twice_population);
        for trajectory in twice_population.trajectories() {
            twice.absorb(trajectory);
        }
        prop_assert_eq!(twice.node_count(), population.total_visits());
        overlap::run(&ctx, &mut twice_population, &mut twice).unwrap();

        prop_assert_eq!(once.node_count(), twice.node_count());
        prop_assert_eq!(once.edge_count(), twice.edge_count());
        prop_assert_eq!(once.to_node_link(), twice.to_node_link());

        let edges = once.edge_count();
        let again = overlap::run(&ctx, &mut once_population, &mut once).unwrap();
        prop_assert_eq!(once.edge_count(), edges);
        prop_assert_eq!(again, report);
    }
}
