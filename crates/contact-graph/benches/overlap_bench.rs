use criterion::{criterion_group, criterion_main, Criterion};

use contact_core::records::group_by_person;
use contact_graph::overlap;
use contact_graph::{build_population, AnalysisContext, ComposedGraph, Population};
use test_fixtures::scenarios;

/// 200 people with 6 pings each: ~19.9K person pairs, ~716K node pairs.
fn build_population_200() -> Population {
    let groups = group_by_person(scenarios::grid_population(200, 6));
    let population = build_population(&groups).unwrap();
    assert_eq!(population.len(), 200);
    population
}

fn bench_detect_parallel(c: &mut Criterion) {
    let population = build_population_200();
    let ctx = AnalysisContext::with_radius(0.002).unwrap();

    c.bench_function("detect_all_parallel_200x6", |b| {
        b.iter(|| overlap::detect_all(&ctx, &population));
    });
}

fn bench_detect_sequential(c: &mut Criterion) {
    let population = build_population_200();
    let ctx = AnalysisContext::with_radius(0.002).unwrap().sequential();

    c.bench_function("detect_all_sequential_200x6", |b| {
        b.iter(|| overlap::detect_all(&ctx, &population));
    });
}

fn bench_full_run(c: &mut Criterion) {
    let population = build_population_200();
    let ctx = AnalysisContext::with_radius(0.002).unwrap();

    c.bench_function("compose_and_apply_200x6", |b| {
        b.iter(|| {
            let mut population = population.clone();
            let mut graph = ComposedGraph::compose(&population);
            overlap::run(&ctx, &mut population, &mut graph).unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_detect_parallel,
    bench_detect_sequential,
    bench_full_run
);
criterion_main!(benches);
