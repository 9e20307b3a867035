use adjgraph::algo::{depth_first_search_with, topological_order, DfsConfig, DfsStrategy, NullVisitor};
use adjgraph::graph::{AdjacencyList, Bidirectional, Directed, VertexDescriptor};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random DAG: edges only go from lower to higher descriptors
fn random_dag(n: usize, avg_degree: usize, seed: u64) -> AdjacencyList<Directed> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = AdjacencyList::with_capacity(n, n * avg_degree);
    for _ in 0..n {
        g.add_vertex();
    }
    for u in 0..n.saturating_sub(1) {
        for _ in 0..avg_degree {
            let v = rng.gen_range(u + 1..n);
            g.add_edge(VertexDescriptor(u), VertexDescriptor(v));
        }
    }
    g
}

/// Benchmark vertex and edge insertion throughput
fn bench_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion");

    for size in [1_000, 10_000, 100_000].iter() {
        group.bench_with_input(BenchmarkId::new("directed", size), size, |b, &size| {
            b.iter(|| {
                let mut g: AdjacencyList<Directed> = AdjacencyList::new();
                let mut prev = g.add_vertex();
                for _ in 1..size {
                    let next = g.add_vertex();
                    g.add_edge(prev, next);
                    prev = next;
                }
                criterion::black_box(g.edge_count());
            });
        });

        group.bench_with_input(BenchmarkId::new("bidirectional", size), size, |b, &size| {
            b.iter(|| {
                let mut g: AdjacencyList<Bidirectional, u64, f64> = AdjacencyList::new();
                let mut prev = g.add_vertex_with(0);
                for i in 1..size {
                    let next = g.add_vertex_with(i as u64);
                    g.add_edge_with(prev, next, 1.0);
                    prev = next;
                }
                criterion::black_box(g.edge_count());
            });
        });
    }
    group.finish();
}

/// Benchmark a full DFS with each strategy
fn bench_dfs(c: &mut Criterion) {
    let mut group = c.benchmark_group("dfs");

    for size in [1_000, 10_000].iter() {
        let g = random_dag(*size, 4, 7);
        for strategy in [DfsStrategy::Recursive, DfsStrategy::Iterative] {
            let id = BenchmarkId::new(format!("{:?}", strategy), size);
            group.bench_with_input(id, &g, |b, g| {
                b.iter(|| depth_first_search_with(g, &mut NullVisitor, DfsConfig { strategy }));
            });
        }
    }
    group.finish();
}

/// Benchmark topological sort on random DAGs
fn bench_topological_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("topological_sort");

    for size in [1_000, 10_000, 100_000].iter() {
        let g = random_dag(*size, 4, 11);
        group.bench_with_input(BenchmarkId::from_parameter(size), &g, |b, g| {
            b.iter(|| criterion::black_box(topological_order(g)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insertion, bench_dfs, bench_topological_sort);
criterion_main!(benches);
