//! Cross-checks against petgraph on random graphs.

use petgraph::graph::{DiGraph, NodeIndex};
use proptest::prelude::*;
use weft::graph::{AdjacencyGraph, Edge, IncidenceGraph, MutableGraph};
use weft::{dijkstra, is_directed_acyclic_graph, strongly_connected_components, topological_sort};

type Layout = (usize, Vec<(usize, usize, u32)>);

fn random_graph() -> impl Strategy<Value = Layout> {
    (1usize..24).prop_flat_map(|n| {
        let edges = proptest::collection::vec((0..n, 0..n, 0u32..50), 0..(n * 3));
        (Just(n), edges)
    })
}

fn build(layout: &Layout) -> (AdjacencyGraph<usize>, DiGraph<(), u32>) {
    let (n, edges) = layout;
    let mut ours = AdjacencyGraph::new();
    let mut theirs = DiGraph::new();
    for v in 0..*n {
        ours.add_vertex(v);
        theirs.add_node(());
    }
    for &(s, t, w) in edges {
        ours.add_edge(s, t).unwrap();
        theirs.add_edge(NodeIndex::new(s), NodeIndex::new(t), w);
    }
    (ours, theirs)
}

proptest! {
    #[test]
    fn test_dijkstra_distances_match(layout in random_graph()) {
        let (ours, theirs) = build(&layout);
        let weights: Vec<u32> = layout.1.iter().map(|&(_, _, w)| w).collect();
        let paths = dijkstra(&ours, 0, |e: Edge<usize>| weights[e.id().index()]).unwrap();
        let expected = petgraph::algo::dijkstra(&theirs, NodeIndex::new(0), None, |e| *e.weight());

        for v in 0..layout.0 {
            prop_assert_eq!(paths.distance(v), expected.get(&NodeIndex::new(v)).copied(), "vertex {}", v);
        }
    }

    #[test]
    fn test_strong_components_match(layout in random_graph()) {
        let (ours, theirs) = build(&layout);
        let labels = strongly_connected_components(&ours);
        let components = petgraph::algo::tarjan_scc(&theirs);
        prop_assert_eq!(labels.count, components.len());

        for component in components {
            let first = component[0].index();
            for node in component {
                prop_assert!(labels.same_component(first, node.index()));
            }
        }
    }

    #[test]
    fn test_topological_sort_agrees_on_acyclicity(layout in random_graph()) {
        let (ours, theirs) = build(&layout);
        let acyclic = petgraph::algo::toposort(&theirs, None).is_ok();
        prop_assert_eq!(is_directed_acyclic_graph(&ours), acyclic);

        match topological_sort(&ours) {
            Ok(order) => {
                prop_assert!(acyclic);
                let mut position = vec![0; layout.0];
                for (i, v) in order.iter().enumerate() {
                    position[*v] = i;
                }
                for &(s, t, _) in &layout.1 {
                    prop_assert!(position[s] < position[t]);
                }
            }
            Err(_) => prop_assert!(!acyclic),
        }
    }
}

#[test]
fn edge_ids_follow_insertion_order() {
    let (ours, _) = build(&(3, vec![(0, 1, 1), (1, 2, 1), (0, 1, 1)]));
    let ids: Vec<usize> = ours.out_edges(0).map(|e| e.id().index()).collect();
    assert_eq!(ids, vec![0, 2]);
}
