//! Criterion benchmarks for graphpath.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use graphpath::generate::{make_random_links, make_random_nodes};
use graphpath::graph::{find_path, UndirectedGraph};
use graphpath::types::Link;

/// Random links over a fixed-size node set.
fn make_links(node_count: usize, max_links: usize) -> Vec<Link> {
    let mut rng = StdRng::seed_from_u64(0xbe7c);
    let nodes = make_random_nodes(node_count, node_count, &mut rng).unwrap();
    make_random_links(&nodes, max_links, &mut rng)
}

/// Path along a chain, the worst case for frontier growth per step.
fn make_chain(node_count: u64) -> Vec<Link> {
    (0..node_count.saturating_sub(1))
        .map(|i| Link::new(i + 1, i, i + 1))
        .collect()
}

fn bench_build_graph_10k(c: &mut Criterion) {
    let links = make_links(10_000, 3);

    c.bench_function("build_graph_10k", |b| {
        b.iter(|| UndirectedGraph::from_edges(black_box(&links)))
    });
}

fn bench_find_path_random_10k(c: &mut Criterion) {
    let links = make_links(10_000, 3);

    c.bench_function("find_path_random_10k", |b| {
        b.iter(|| {
            let _ = find_path(&0, &9_999, black_box(&links));
        })
    });
}

fn bench_find_path_chain_1k(c: &mut Criterion) {
    let links = make_chain(1_000);

    c.bench_function("find_path_chain_1k", |b| {
        b.iter(|| {
            let _ = find_path(&0, &999, black_box(&links));
        })
    });
}

fn bench_shortest_path_prebuilt_10k(c: &mut Criterion) {
    let graph = UndirectedGraph::from_edges(&make_links(10_000, 3));

    c.bench_function("shortest_path_prebuilt_10k", |b| {
        b.iter(|| {
            let _ = graph.shortest_path(&0, black_box(&5_000));
        })
    });
}

fn bench_generate_1k(c: &mut Criterion) {
    c.bench_function("generate_1k", |b| {
        b.iter(|| make_links(black_box(1_000), 3))
    });
}

criterion_group!(
    benches,
    bench_build_graph_10k,
    bench_find_path_random_10k,
    bench_find_path_chain_1k,
    bench_shortest_path_prebuilt_10k,
    bench_generate_1k,
);
criterion_main!(benches);
