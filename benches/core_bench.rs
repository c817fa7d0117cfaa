use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use graph_explorer::viewport::algorithms::{degree_centrality, PageRank};
use graph_explorer::viewport::force_layout::{self, ForceLayoutConfig};
use graph_explorer::{
    AlgorithmKind, AlgorithmRequest, Edge, ExplorerOptions, GraphViewModel, GraphViewport, Node,
};
use std::hint::black_box;

/// Ring mit Sehnen: jeder Node kennt seinen Nachfolger und jeden siebten Node.
fn build_synthetic_graph(node_count: usize) -> GraphViewModel {
    let nodes = (0..node_count)
        .map(|i| Node::new(i as i64, if i % 3 == 0 { "Person" } else { "City" }))
        .collect();
    let mut edges = Vec::with_capacity(node_count * 2);
    let mut next_id = node_count as i64;
    for i in 0..node_count {
        for offset in [1usize, 7] {
            let target = (i + offset) % node_count;
            edges.push(Edge::new(next_id, i as i64, target as i64, "LINK"));
            next_id += 1;
        }
    }
    GraphViewModel { nodes, edges }
}

fn build_index_pairs(node_count: usize) -> Vec<(usize, usize)> {
    (0..node_count)
        .flat_map(|i| [(i, (i + 1) % node_count), (i, (i * 7 + 3) % node_count)])
        .collect()
}

fn bench_apply_data(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport_apply_data");

    for &node_count in &[50usize, 200usize] {
        let graph = build_synthetic_graph(node_count);
        group.bench_with_input(
            BenchmarkId::new("apply_with_layout", node_count),
            &graph,
            |b, graph| {
                let mut viewport =
                    GraphViewport::new(ExplorerOptions::default(), Vec2::new(1280.0, 720.0));
                b.iter(|| {
                    viewport.apply_data(black_box(graph));
                    black_box(viewport.stats().node_count)
                })
            },
        );
    }

    group.finish();
}

fn bench_force_layout(c: &mut Criterion) {
    let config = ForceLayoutConfig::default();
    let node_count = 500usize;
    let pairs = build_index_pairs(node_count);
    let initial: Vec<Vec2> = (0..node_count)
        .map(|i| Vec2::new((i % 25) as f32 * 40.0, (i / 25) as f32 * 40.0))
        .collect();

    c.bench_function("force_layout_grid_500", |b| {
        b.iter(|| {
            let run = force_layout::run(black_box(&initial), black_box(&pairs), &config)
                .expect("Layout sollte konvergieren");
            black_box(run.iterations)
        })
    });
}

fn bench_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_algorithms");

    for &node_count in &[1_000usize, 10_000usize] {
        let pairs = build_index_pairs(node_count);

        group.bench_with_input(BenchmarkId::new("pagerank", node_count), &pairs, |b, pairs| {
            let pagerank = PageRank::new(50, 0.85);
            b.iter(|| black_box(pagerank.run(node_count, black_box(pairs))))
        });

        group.bench_with_input(
            BenchmarkId::new("degree_centrality", node_count),
            &pairs,
            |b, pairs| b.iter(|| black_box(degree_centrality(node_count, black_box(pairs)))),
        );
    }

    group.finish();
}

fn bench_run_algorithm(c: &mut Criterion) {
    let mut viewport = GraphViewport::new(ExplorerOptions::default(), Vec2::new(1280.0, 720.0));
    viewport.apply_data(&build_synthetic_graph(200));
    let request = AlgorithmRequest::new(AlgorithmKind::PageRank);

    c.bench_function("viewport_pagerank_200", |b| {
        b.iter(|| viewport.run_algorithm(black_box(&request)))
    });
}

criterion_group!(
    benches,
    bench_apply_data,
    bench_force_layout,
    bench_algorithms,
    bench_run_algorithm
);
criterion_main!(benches);
