//! Criterion benchmarks for simplegraph.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use simplegraph::graph::Graph;
use simplegraph::types::{EdgeKind, VertexId};

/// Build a random graph with a mix of directed and undirected edges.
fn make_graph(vertex_count: usize, edges_per_vertex: usize) -> (Graph, Vec<VertexId>) {
    let mut rng = rand::thread_rng();
    let mut graph = Graph::new();
    let vertices: Vec<VertexId> = (0..vertex_count).map(|_| graph.create_vertex()).collect();

    for &from in &vertices {
        for _ in 0..edges_per_vertex {
            let to = vertices[rng.gen_range(0..vertex_count)];
            let kind = EdgeKind::from_directed(rng.gen_bool(0.7));
            graph
                .connect(from, to, kind, rng.gen_range(0..100))
                .unwrap();
        }
    }

    (graph, vertices)
}

fn bench_connect(c: &mut Criterion) {
    let (mut graph, vertices) = make_graph(10_000, 3);

    c.bench_function("connect_in_10k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let from = vertices[rng.gen_range(0..vertices.len())];
            let to = vertices[rng.gen_range(0..vertices.len())];
            let _ = graph.connect(from, to, EdgeKind::Undirected, 1);
        })
    });
}

fn bench_bfs_bounded(c: &mut Criterion) {
    let (graph, vertices) = make_graph(100_000, 3);

    c.bench_function("bfs_first_10k_steps", |b| {
        b.iter(|| graph.bfs(vertices[0]).unwrap().take(10_000).count())
    });
}

fn bench_dfs_bounded(c: &mut Criterion) {
    let (graph, vertices) = make_graph(100_000, 3);

    c.bench_function("dfs_first_10k_steps", |b| {
        b.iter(|| graph.dfs(vertices[0]).unwrap().take(10_000).count())
    });
}

fn bench_distinct_full(c: &mut Criterion) {
    let (graph, vertices) = make_graph(100_000, 3);

    c.bench_function("bfs_distinct_100k", |b| {
        b.iter(|| graph.bfs(vertices[0]).unwrap().distinct().count())
    });
}

criterion_group!(
    benches,
    bench_connect,
    bench_bfs_bounded,
    bench_dfs_bounded,
    bench_distinct_full,
);
criterion_main!(benches);
