//! Property tests for community detection: every run returns a disjoint
//! cover of the composed graph.

use std::collections::BTreeSet;

use proptest::prelude::*;

use contact_analysis::{CommunityDetection, ContactTracer, Louvain};
use contact_core::models::{Condition, ObservationTime, PersonRecord, VisitId};
use contact_graph::AnalysisContext;

fn population_strategy() -> impl Strategy<Value = Vec<PersonRecord>> {
    let person = (
        prop::collection::vec((0.0_f64..0.006, 0.0_f64..0.006, 0u32..1440), 1..5),
        any::<bool>(),
    );
    prop::collection::vec(person, 0..7).prop_map(|people| {
        let mut records = Vec::new();
        for (p, (pings, sick)) in people.into_iter().enumerate() {
            let condition = if sick { Condition::Sick } else { Condition::Healthy };
            for (lat, lon, minute) in pings {
                records.push(PersonRecord::new(
                    format!("P{p}"),
                    lat,
                    lon,
                    ObservationTime::from_seconds(minute * 60).unwrap(),
                    condition,
                ));
            }
        }
        records
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn partition_is_a_disjoint_cover(records in population_strategy(), seed in any::<u64>()) {
        let ctx = AnalysisContext::with_radius(0.002).unwrap().sequential();
        let outcome = ContactTracer::new(ctx).trace(records).unwrap();
        let partition = Louvain::new(seed).detect(&outcome.graph);

        let nodes: BTreeSet<VisitId> = outcome.graph.nodes().map(|n| n.id.clone()).collect();
        let mut covered: BTreeSet<VisitId> = BTreeSet::new();
        for community in partition.communities() {
            prop_assert!(!community.is_empty());
            for visit in community {
                prop_assert!(covered.insert(visit.clone()), "{} in two communities", visit);
            }
        }
        prop_assert_eq!(covered, nodes);
    }

    #[test]
    fn communities_never_cross_components(records in population_strategy(), seed in any::<u64>()) {
        let ctx = AnalysisContext::with_radius(0.002).unwrap().sequential();
        let outcome = ContactTracer::new(ctx).trace(records).unwrap();
        let partition = Louvain::new(seed).detect(&outcome.graph);

        for node in outcome.graph.nodes() {
            if outcome.graph.degree(&node.id) == 0 {
                let c = partition.community_of(&node.id).unwrap();
                prop_assert_eq!(partition.communities()[c].len(), 1);
            }
        }
    }

    #[test]
    fn detection_is_deterministic_per_seed(records in population_strategy(), seed in any::<u64>()) {
        let ctx = AnalysisContext::with_radius(0.002).unwrap();
        let outcome = ContactTracer::new(ctx).trace(records).unwrap();
        let a = Louvain::new(seed).detect(&outcome.graph);
        let b = Louvain::new(seed).detect(&outcome.graph);
        prop_assert_eq!(a.communities(), b.communities());
    }
}
