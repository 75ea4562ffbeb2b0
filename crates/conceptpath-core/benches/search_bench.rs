//! Benchmarks for bounded shortest-path search.

#![allow(clippy::unwrap_used)]

use conceptpath_core::{search_shortest_path, GraphBuilder, NodeId};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// A `side x side` lattice with `IsA` edges to the right and downwards.
fn lattice(side: u32) -> conceptpath_core::ConceptGraph {
    let mut builder = GraphBuilder::new();
    for row in 0..side {
        for col in 0..side {
            let here = format!("n{row}_{col}");
            if col + 1 < side {
                builder
                    .add_edge(&here, "/r/IsA", &format!("n{row}_{}", col + 1), 1.0)
                    .unwrap();
            }
            if row + 1 < side {
                builder
                    .add_edge(&here, "/r/IsA", &format!("n{}_{col}", row + 1), 1.0)
                    .unwrap();
            }
        }
    }
    builder.build()
}

fn bench_search(c: &mut Criterion) {
    let graph = lattice(100);
    let start = graph.node_id("n0_0").unwrap();
    let near = graph.node_id("n1_1").unwrap();
    let far = graph.node_id("n99_99").unwrap();

    c.bench_function("search_adjacent_bound_3", |b| {
        b.iter(|| search_shortest_path(black_box(start), black_box(near), &graph, 3))
    });

    c.bench_function("search_unreachable_bound_3", |b| {
        b.iter(|| search_shortest_path(black_box(start), black_box(far), &graph, 3))
    });

    c.bench_function("search_far_bound_200", |b| {
        b.iter(|| search_shortest_path(black_box(start), black_box(far), &graph, 200))
    });

    c.bench_function("search_self", |b| {
        b.iter(|| search_shortest_path(black_box(NodeId(0)), black_box(NodeId(0)), &graph, 3))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
