use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use weft::graph::{AdjacencyGraph, Edge, GraphEdge, MutableGraph};
use weft::{edmonds_karp, ReversedEdgeAugmentor};

// Layered network: source -> `width` columns of `depth` layers -> sink, with
// every vertex linked to the next layer's neighbours.
fn layered(width: usize, depth: usize) -> (AdjacencyGraph<usize>, usize, usize) {
    let mut graph = AdjacencyGraph::new();
    let source = width * depth;
    let sink = source + 1;
    for v in 0..=sink {
        graph.add_vertex(v);
    }
    for col in 0..width {
        graph.add_edge(source, col).unwrap();
        graph.add_edge((depth - 1) * width + col, sink).unwrap();
    }
    for layer in 0..depth - 1 {
        for col in 0..width {
            let v = layer * width + col;
            for next in [col, (col + 1) % width] {
                graph.add_edge(v, (layer + 1) * width + next).unwrap();
            }
        }
    }
    (graph, source, sink)
}

fn capacity(edge: Edge<usize>) -> u64 {
    ((edge.source() * 31 + edge.target() * 17) % 23 + 1) as u64
}

fn bench_edmonds_karp(c: &mut Criterion) {
    let mut group = c.benchmark_group("Edmonds-Karp");

    for width in [8usize, 32] {
        let (mut graph, source, sink) = layered(width, 16);

        group.bench_with_input(BenchmarkId::new("augment_and_solve", width), &width, |b, _| {
            b.iter(|| {
                let mut augmentor = ReversedEdgeAugmentor::new(&mut graph);
                augmentor.add_reversed_edges().unwrap();
                black_box(edmonds_karp(&augmentor, capacity, source, sink).unwrap().total)
            });
        });

        let mut augmentor = ReversedEdgeAugmentor::new(&mut graph);
        augmentor.add_reversed_edges().unwrap();
        group.bench_with_input(BenchmarkId::new("solve_only", width), &width, |b, _| {
            b.iter(|| black_box(edmonds_karp(&augmentor, capacity, source, sink).unwrap().total));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_edmonds_karp);
criterion_main!(benches);
