extern crate graphwalk;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use graphwalk::prelude::*;
use std::hint::black_box;

/// Grid graph of `side * side` nodes with right and down edges.
fn grid(side: usize, directed: bool) -> Graph<usize> {
    let mut graph = Graph::new(directed);
    for i in 0..side * side {
        graph.add_node(i);
    }
    for row in 0..side {
        for col in 0..side {
            let id = NodeId::new(row * side + col);
            let weight = ((row * 31 + col * 17) % 13) as f64;
            if col + 1 < side {
                graph.add_edge(id, NodeId::new(id.index() + 1), weight).unwrap();
            }
            if row + 1 < side {
                graph.add_edge(id, NodeId::new(id.index() + side), weight + 1.0).unwrap();
            }
        }
    }
    graph
}

/// Benchmark the three algorithms on grids of increasing size
fn bench_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("algorithms");
    for side in [16usize, 64, 128] {
        let undirected = grid(side, false);
        let directed = grid(side, true);
        group.throughput(Throughput::Elements((side * side) as u64));

        group.bench_with_input(BenchmarkId::new("dfs", side), &undirected, |b, graph| {
            b.iter(|| {
                let paths = DepthFirstTraversal::new()
                    .run(black_box(graph), &mut FirstNode, &mut NoopVisitor)
                    .unwrap();
                black_box(paths)
            });
        });

        group.bench_with_input(BenchmarkId::new("spanning", side), &undirected, |b, graph| {
            b.iter(|| {
                let paths = SpanningTree::new()
                    .run(black_box(graph), &mut FirstNode, &mut NoopVisitor)
                    .unwrap();
                black_box(paths)
            });
        });

        group.bench_with_input(BenchmarkId::new("topological", side), &directed, |b, graph| {
            b.iter(|| {
                let paths = TopologicalSort::new()
                    .run(black_box(graph), &mut FirstNode, &mut NoopVisitor)
                    .unwrap();
                black_box(paths)
            });
        });
    }
    group.finish();
}

/// Benchmark island recomputation after a mutation invalidates the cache
fn bench_islands(c: &mut Criterion) {
    let graph = grid(128, false);
    c.bench_function("islands_recompute", |b| {
        b.iter_batched(
            || graph.clone(),
            |mut graph| {
                let _ = graph.remove_edge_between(NodeId::new(0), NodeId::new(1));
                black_box(graph.island_count())
            },
            criterion::BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_algorithms, bench_islands);
criterion_main!(benches);
