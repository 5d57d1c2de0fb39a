//! Drives pairwise detection over the whole population.
//!
//! Detection runs on the rayon pool over immutable trajectories. The
//! resulting per-pair deltas are folded into the composed graph by one
//! sequential pass, which is the only graph mutator.

use contact_core::errors::ContactResult;
use contact_core::overlap_span;
use rayon::prelude::*;
use tracing::{info, warn};

use crate::context::AnalysisContext;
use crate::graph::ComposedGraph;
use crate::report::BreachReport;
use crate::trajectory::Population;

use super::detector::detect_pair;
use super::PairOutcome;

/// Every unordered pair of distinct people, as trajectory indices `(i, j)`
/// with `i < j`.
pub fn person_pairs(population: &Population) -> Vec<(usize, usize)> {
    let trajectories = population.trajectories();
    let n = trajectories.len();
    let mut pairs = Vec::with_capacity(n.saturating_mul(n.saturating_sub(1)) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            if trajectories[i].person() != trajectories[j].person() {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Total node-pair comparisons a full run performs.
pub fn comparison_count(population: &Population) -> u64 {
    let trajectories = population.trajectories();
    person_pairs(population)
        .iter()
        .map(|&(i, j)| trajectories[i].len() as u64 * trajectories[j].len() as u64)
        .sum()
}

/// Run detection for every person pair. Pure: nothing is mutated.
/// Output order follows [`person_pairs`] regardless of parallelism.
pub fn detect_all(ctx: &AnalysisContext, population: &Population) -> Vec<PairOutcome> {
    let pairs = person_pairs(population);
    let _span = overlap_span!(population.len(), pairs.len()).entered();

    let comparisons = comparison_count(population);
    if comparisons > ctx.max_pair_comparisons {
        warn!(
            comparisons,
            cap = ctx.max_pair_comparisons,
            "pairwise comparisons exceed the configured soft cap; runtime grows quadratically"
        );
    }

    let trajectories = population.trajectories();
    if ctx.parallel {
        pairs
            .par_iter()
            .map(|&(i, j)| detect_pair(ctx, &trajectories[i], &trajectories[j]))
            .collect()
    } else {
        pairs
            .iter()
            .map(|&(i, j)| detect_pair(ctx, &trajectories[i], &trajectories[j]))
            .collect()
    }
}

/// Fold pair outcomes into the composed graph and trajectory flags, and
/// gather every record into one report.
///
/// Flag writes are idempotent and breach edges are keyed by the unordered
/// visit pair, so the fold order does not change the result.
pub fn apply_outcomes(
    outcomes: Vec<PairOutcome>,
    population: &mut Population,
    graph: &mut ComposedGraph,
) -> ContactResult<BreachReport> {
    let mut report = BreachReport::new();
    let mut new_edges = 0usize;

    for outcome in outcomes {
        for (a, b, edge) in &outcome.delta.breaches {
            if graph.insert_breach(a, b, *edge)? {
                new_edges += 1;
            }
            for visit in [a, b] {
                graph.mark_breached(visit)?;
                if let Some(t) = population.get_mut(&visit.person) {
                    t.mark_breached(visit.seq);
                }
            }
        }
        for visit in &outcome.delta.infection_starts {
            graph.mark_infection_start(visit)?;
            if let Some(t) = population.get_mut(&visit.person) {
                t.mark_infection_start(visit.seq);
            }
        }
        report.extend(outcome.records);
    }

    let summary = report.summary();
    info!(
        evaluated = summary.evaluated,
        breached = summary.breached,
        high_risk = summary.high_risk,
        new_edges,
        "overlap detection applied"
    );
    Ok(report)
}

/// Detect and apply in one call.
pub fn run(
    ctx: &AnalysisContext,
    population: &mut Population,
    graph: &mut ComposedGraph,
) -> ContactResult<BreachReport> {
    let outcomes = detect_all(ctx, population);
    apply_outcomes(outcomes, population, graph)
}
