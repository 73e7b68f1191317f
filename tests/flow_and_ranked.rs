use std::collections::HashMap;

use weft::graph::algorithms::ranked::RankedPath;
use weft::graph::{AdjacencyGraph, Edge, EdgeListGraph, GraphEdge};
use weft::{
    dijkstra, edmonds_karp, ranked_shortest_paths, ErrorKind, GraphError, RankedPathOptions,
    ReversedEdgeAugmentor,
};

fn weighted(edges: &[(char, char, u32)]) -> (AdjacencyGraph<char>, HashMap<(char, char), u32>) {
    let graph = AdjacencyGraph::from_edges(edges.iter().map(|&(s, t, _)| (s, t)));
    let weights = edges.iter().map(|&(s, t, w)| ((s, t), w)).collect();
    (graph, weights)
}

#[test]
fn flow_argument_and_state_errors() {
    let (mut g, caps) = weighted(&[('s', 'a', 2), ('a', 't', 1)]);
    let capacity = |e: Edge<char>| caps[&(e.source(), e.target())];
    let mut augmentor = ReversedEdgeAugmentor::new(&mut g);

    let err = edmonds_karp(&augmentor, capacity, 's', 's').unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Argument);

    let err = edmonds_karp(&augmentor, capacity, 's', 't').unwrap_err();
    assert!(matches!(err, GraphError::InvalidOperation(_)));

    augmentor.add_reversed_edges().unwrap();
    let flow = edmonds_karp(&augmentor, capacity, 's', 't').unwrap();
    assert_eq!(flow.total, 1);
}

#[test]
fn augmentation_is_undone_on_drop() -> anyhow::Result<()> {
    let (mut g, caps) = weighted(&[('s', 'a', 4), ('a', 'b', 3), ('s', 'b', 2), ('b', 't', 9)]);
    let before = g.edge_count();
    {
        let mut augmentor = ReversedEdgeAugmentor::new(&mut g);
        augmentor.add_reversed_edges()?;
        assert_eq!(augmentor.graph().edge_count(), before * 2);
        let flow = edmonds_karp(&augmentor, |e| caps[&(e.source(), e.target())], 's', 't')?;
        assert_eq!(flow.total, 5);
        assert_eq!(flow.flow(augmentor.graph().find_edge('a', 'b').unwrap()), 3);
    }
    assert_eq!(g.edge_count(), before);
    Ok(())
}

fn yen_network() -> (AdjacencyGraph<char>, HashMap<(char, char), u32>) {
    weighted(&[
        ('c', 'd', 3),
        ('c', 'e', 2),
        ('d', 'f', 4),
        ('e', 'd', 1),
        ('e', 'f', 2),
        ('e', 'g', 3),
        ('f', 'g', 2),
        ('f', 'h', 1),
        ('g', 'h', 2),
    ])
}

#[test]
fn first_ranked_path_is_the_shortest_path() {
    let (g, weights) = yen_network();
    let weight = |e: Edge<char>| weights[&(e.source(), e.target())];

    let shortest = dijkstra(&g, 'c', weight).unwrap();
    let first = ranked_shortest_paths(&g, 'c', 'h', weight, RankedPathOptions::default())
        .unwrap()
        .next()
        .unwrap();
    assert_eq!(Some(first.edges), shortest.path_to('h'));
    assert_eq!(Some(first.weight), shortest.distance('h'));
}

#[test]
fn asking_for_more_paths_extends_the_prefix() {
    let (g, weights) = yen_network();
    let weight = |e: Edge<char>| weights[&(e.source(), e.target())];
    let run = |k| -> Vec<RankedPath<Edge<char>, u32>> {
        ranked_shortest_paths(&g, 'c', 'h', weight, RankedPathOptions::with_path_count(k))
            .unwrap()
            .collect()
    };

    let mut previous = Vec::new();
    for k in 1..=8 {
        let current = run(k);
        assert!(current.len() <= k);
        assert_eq!(&current[..previous.len()], &previous[..], "k = {k}");
        assert!(current.windows(2).all(|w| w[0].weight <= w[1].weight));
        previous = current;
    }
    assert_eq!(previous.len(), 7);
}

#[test]
fn ranked_paths_are_loopless() {
    let (g, weights) = yen_network();
    let weight = |e: Edge<char>| weights[&(e.source(), e.target())];
    for path in ranked_shortest_paths(&g, 'c', 'h', weight, RankedPathOptions::with_path_count(10))
        .unwrap()
    {
        let mut seen = vec![path.edges[0].source()];
        for edge in &path.edges {
            assert!(!seen.contains(&edge.target()), "{path:?} revisits a vertex");
            seen.push(edge.target());
        }
        assert_eq!(seen.last(), Some(&'h'));
    }
}
