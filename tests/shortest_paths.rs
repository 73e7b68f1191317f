use weft::graph::{AdjacencyGraph, Edge, GraphEdge};
use weft::{astar, bellman_ford, dag_shortest_paths, dijkstra, ErrorKind};

fn sample_dag() -> AdjacencyGraph<u32> {
    AdjacencyGraph::from_edges([
        (1, 2),
        (1, 3),
        (1, 8),
        (2, 4),
        (2, 5),
        (2, 6),
        (3, 4),
        (4, 5),
        (4, 6),
        (5, 6),
        (6, 7),
        (8, 10),
        (9, 5),
        (10, 9),
    ])
}

fn endpoints(path: &[Edge<u32>]) -> Vec<(u32, u32)> {
    path.iter().map(|e| (e.source(), e.target())).collect()
}

#[test]
fn all_four_algorithms_agree_on_unit_weights() {
    let g = sample_dag();
    let unit = |_: Edge<u32>| 1i32;

    let runs = [
        ("dijkstra", dijkstra(&g, 2, unit).unwrap()),
        ("astar", astar(&g, 2, unit, |_| 0).unwrap()),
        ("bellman-ford", bellman_ford(&g, 2, unit).unwrap().paths),
        ("dag", dag_shortest_paths(&g, 2, unit).unwrap()),
    ];

    for (name, paths) in &runs {
        assert_eq!(
            endpoints(&paths.path_to(7).unwrap()),
            vec![(2, 6), (6, 7)],
            "{name}: path to 7"
        );
        assert_eq!(endpoints(&paths.path_to(4).unwrap()), vec![(2, 4)], "{name}: path to 4");
        assert_eq!(paths.distance(5), Some(1), "{name}");
        assert!(!paths.is_reached(1), "{name}: 1 is upstream of the root");
        assert!(paths.path_to(10).is_none(), "{name}");
    }
}

#[test]
fn reported_distances_match_path_weights() {
    let g = sample_dag();
    let weight = |e: Edge<u32>| i64::from(e.source() * 3 + e.target());
    let paths = dijkstra(&g, 1, weight).unwrap();
    for v in paths.reached_vertices().collect::<Vec<_>>() {
        let path = paths.path_to(v).unwrap();
        assert_eq!(paths.distance(v), Some(weft::path_weight(&path, weight)));
        if let Some(last) = path.last() {
            assert_eq!(last.target(), v);
        }
    }
}

#[test]
fn negative_cycle_is_flagged() {
    let mut g = AdjacencyGraph::new();
    let weights = [((1, 2), 12), ((2, 4), -42), ((4, 1), 22)];
    for ((s, t), _) in weights {
        g.add_vertices_and_edge(s, t);
    }
    let lookup = |e: Edge<u32>| {
        weights
            .iter()
            .find(|((s, t), _)| *s == e.source() && *t == e.target())
            .map_or(0, |(_, w)| *w)
    };
    let result = bellman_ford(&g, 1, lookup).unwrap();
    assert!(result.found_negative_cycle);
}

#[test]
fn negative_edges_without_cycle() {
    let mut g = AdjacencyGraph::new();
    let weights = [((1, 2), 4), ((1, 3), 5), ((3, 2), -3), ((2, 4), 1)];
    for ((s, t), _) in weights {
        g.add_vertices_and_edge(s, t);
    }
    let lookup = |e: Edge<u32>| {
        weights
            .iter()
            .find(|((s, t), _)| *s == e.source() && *t == e.target())
            .map_or(0, |(_, w)| *w)
    };
    let result = bellman_ford(&g, 1, lookup).unwrap();
    assert!(!result.found_negative_cycle);
    assert_eq!(result.paths.distance(2), Some(2));
    assert_eq!(result.paths.distance(4), Some(3));
    assert_eq!(
        endpoints(&result.paths.path_to(4).unwrap()),
        vec![(1, 3), (3, 2), (2, 4)]
    );
}

#[test]
fn float_weights_work() {
    let g = AdjacencyGraph::from_edges([('a', 'b'), ('b', 'c'), ('a', 'c')]);
    let weight = |e: Edge<char>| match (e.source(), e.target()) {
        ('a', 'c') => 2.5,
        _ => 1.0_f64,
    };
    let paths = dijkstra(&g, 'a', weight).unwrap();
    assert_eq!(paths.distance('c'), Some(2.0));
}

#[test]
fn dag_relaxation_rejects_cycles() {
    let g = AdjacencyGraph::from_edges([(1, 2), (2, 3), (3, 1)]);
    let err = dag_shortest_paths(&g, 1, |_| 1u32).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Structural);
}

#[test]
fn unknown_root_is_an_argument_error() {
    let g = sample_dag();
    for err in [
        dijkstra(&g, 42, |_| 1u32).unwrap_err(),
        bellman_ford(&g, 42, |_| 1u32).unwrap_err(),
        dag_shortest_paths(&g, 42, |_| 1u32).unwrap_err(),
    ] {
        assert_eq!(err.kind(), ErrorKind::Argument);
    }
}
