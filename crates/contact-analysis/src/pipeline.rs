//! End-to-end run: records in, breach and analysis reports out.

use contact_core::config::ContactConfig;
use contact_core::errors::ContactResult;
use contact_core::models::PersonRecord;
use contact_core::records::group_by_person;
use contact_graph::overlap;
use contact_graph::{build_population, AnalysisContext, BreachReport, ComposedGraph, Population};
use tracing::info;

use crate::analyzer::{AnalysisReport, PopulationAnalyzer};

/// Everything one run produces.
#[derive(Debug, Clone)]
pub struct TraceOutcome {
    pub population: Population,
    pub graph: ComposedGraph,
    pub breaches: BreachReport,
    pub analysis: AnalysisReport,
}

/// Drives the stages in order: group, build trajectories, compose, detect
/// overlaps, analyze.
#[derive(Debug, Clone)]
pub struct ContactTracer {
    ctx: AnalysisContext,
}

impl ContactTracer {
    pub fn new(ctx: AnalysisContext) -> Self {
        Self { ctx }
    }

    /// Validates the config before any graph work.
    pub fn from_config(config: &ContactConfig) -> ContactResult<Self> {
        Ok(Self::new(AnalysisContext::from_config(config)?))
    }

    pub fn context(&self) -> &AnalysisContext {
        &self.ctx
    }

    pub fn trace(&self, records: impl IntoIterator<Item = PersonRecord>) -> ContactResult<TraceOutcome> {
        let groups = group_by_person(records);
        let mut population = build_population(&groups)?;
        let mut graph = ComposedGraph::compose(&population);
        let breaches = overlap::run(&self.ctx, &mut population, &mut graph)?;
        let analysis = PopulationAnalyzer::new(&self.ctx).analyze(&graph);

        info!(
            people = population.len(),
            visits = graph.node_count(),
            edges = graph.edge_count(),
            high_risk = breaches.summary().high_risk,
            "trace complete"
        );
        Ok(TraceOutcome {
            population,
            graph,
            breaches,
            analysis,
        })
    }
}
