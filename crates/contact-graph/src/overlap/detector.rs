//! Pairwise overlap detection between two trajectories.

use contact_core::models::Condition;

use crate::context::AnalysisContext;
use crate::distance::distance;
use crate::graph::BreachEdge;
use crate::trajectory::{DwellInterval, Trajectory};

use super::{BreachRecord, GraphDelta, PairOutcome, RiskLevel};

/// Classify one node pair. The radius is inclusive.
pub fn classify(
    distance: f64,
    radius: f64,
    interval_a: &DwellInterval,
    interval_b: &DwellInterval,
    condition_a: Condition,
    condition_b: Condition,
) -> BreachEdge {
    let breached = distance <= radius;
    let time_overlap = breached && interval_a.overlaps(interval_b);
    let risk = if time_overlap && (condition_a.is_sick() || condition_b.is_sick()) {
        RiskLevel::High
    } else {
        RiskLevel::None
    };
    BreachEdge {
        distance,
        breached,
        time_overlap,
        risk,
    }
}

/// Evaluate every node pair of `a` × `b`.
///
/// Reads both trajectories only; the returned delta describes the graph
/// mutations for breached pairs. A high-risk pair marks the healthy party's
/// visit as an infection start. Nothing is marked when both are sick.
pub fn detect_pair(ctx: &AnalysisContext, a: &Trajectory, b: &Trajectory) -> PairOutcome {
    let intervals_a = a.dwell_intervals();
    let intervals_b = b.dwell_intervals();
    let mut records = Vec::with_capacity(a.len() * b.len());
    let mut delta = GraphDelta::default();

    for (visit_a, interval_a) in a.visits().zip(&intervals_a) {
        for (visit_b, interval_b) in b.visits().zip(&intervals_b) {
            let d = distance(ctx.metric, visit_a.location, visit_b.location);
            let edge = classify(
                d,
                ctx.microcell_radius,
                interval_a,
                interval_b,
                a.condition(),
                b.condition(),
            );

            if edge.breached {
                delta
                    .breaches
                    .push((visit_a.id.clone(), visit_b.id.clone(), edge));
            }
            if edge.risk == RiskLevel::High {
                if a.condition() == Condition::Healthy {
                    delta.infection_starts.push(visit_a.id.clone());
                }
                if b.condition() == Condition::Healthy {
                    delta.infection_starts.push(visit_b.id.clone());
                }
            }

            records.push(BreachRecord {
                person1: a.person().clone(),
                visit1: visit_a.id.seq,
                condition1: a.condition(),
                location1: visit_a.location,
                entry1: interval_a.entry,
                exit1: interval_a.exit,
                person2: b.person().clone(),
                visit2: visit_b.id.seq,
                condition2: b.condition(),
                location2: visit_b.location,
                entry2: interval_b.entry,
                exit2: interval_b.exit,
                distance: edge.distance,
                breached: edge.breached,
                time_overlap: edge.time_overlap,
                risk: edge.risk,
            });
        }
    }

    tracing::trace!(
        first = %a.person(),
        second = %b.person(),
        evaluated = records.len(),
        breaches = delta.breaches.len(),
        "pair evaluated"
    );

    PairOutcome {
        first: a.person().clone(),
        second: b.person().clone(),
        records,
        delta,
    }
}
