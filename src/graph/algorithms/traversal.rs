//! Generic breadth-first and depth-first walks with a visitor protocol.
//!
//! A walk reports its progress to a [`Visitor`] as a sequence of events:
//!
//! | Event | BFS | DFS |
//! |-------|-----|-----|
//! | `start_vertex` | each root | each root |
//! | `discover_vertex` | first time a vertex is reached | same |
//! | `examine_vertex` | vertex popped from the queue | - |
//! | `examine_edge` | every out-edge of an examined vertex | every out-edge, in order |
//! | `tree_edge` | edge to a White vertex | same |
//! | `non_tree_edge` | edge to a Gray or Black vertex | - |
//! | `back_edge` | - | edge to a Gray vertex (an ancestor) |
//! | `forward_edge` | - | edge to a Black descendant |
//! | `cross_edge` | - | edge to a Black non-descendant |
//! | `finish_vertex` | all out-edges handled | same |
//!
//! Every event returns a [`Control`]:
//! - `Continue` goes on normally;
//! - `Prune` skips the subject: from `discover_vertex`/`examine_vertex` the
//!   vertex's out-edges are not explored, from `examine_edge`/`tree_edge` the
//!   edge is ignored (its target stays undiscovered); elsewhere it acts like
//!   `Continue`;
//! - `Break` stops the whole walk. Side effects of the events already emitted
//!   stand.
//!
//! The depth-first walk keeps an explicit stack of edge iterators instead of
//! recursing, so it handles graphs of any depth.

use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::access::{Color, ColorMap};
use crate::graph::traits::{GraphEdge, IncidenceGraph, VertexListGraph};

/// Visitor verdict after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Control {
    /// Keep walking.
    #[default]
    Continue,
    /// Skip the vertex or edge the event is about.
    Prune,
    /// Stop the walk.
    Break,
}

impl Control {
    /// The more restrictive of two verdicts (`Break` > `Prune` > `Continue`).
    #[inline]
    pub fn strongest(self, other: Self) -> Self {
        match (self, other) {
            (Self::Break, _) | (_, Self::Break) => Self::Break,
            (Self::Prune, _) | (_, Self::Prune) => Self::Prune,
            _ => Self::Continue,
        }
    }
}

/// Frontier discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraversalOrder {
    /// FIFO frontier.
    BreadthFirst,
    /// LIFO frontier (recursion order).
    DepthFirst,
}

/// How a walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalStatus {
    /// Every reachable vertex was finished.
    Completed,
    /// A visitor returned [`Control::Break`].
    Stopped,
}

/// Receives traversal events. Every method defaults to [`Control::Continue`].
#[allow(unused_variables)]
pub trait Visitor<V, E> {
    /// A walk (re)starts at `vertex`.
    fn start_vertex(&mut self, vertex: V) -> Control {
        Control::Continue
    }

    /// `vertex` turned Gray.
    fn discover_vertex(&mut self, vertex: V) -> Control {
        Control::Continue
    }

    /// `vertex` left the BFS queue.
    fn examine_vertex(&mut self, vertex: V) -> Control {
        Control::Continue
    }

    /// An out-edge is about to be classified.
    fn examine_edge(&mut self, edge: E) -> Control {
        Control::Continue
    }

    /// `edge` reaches a White vertex and becomes part of the search tree.
    fn tree_edge(&mut self, edge: E) -> Control {
        Control::Continue
    }

    /// BFS: `edge` reaches an already discovered vertex.
    fn non_tree_edge(&mut self, edge: E) -> Control {
        Control::Continue
    }

    /// DFS: `edge` reaches a Gray ancestor, closing a cycle.
    fn back_edge(&mut self, edge: E) -> Control {
        Control::Continue
    }

    /// DFS: `edge` reaches a finished descendant.
    fn forward_edge(&mut self, edge: E) -> Control {
        Control::Continue
    }

    /// DFS: `edge` reaches a finished vertex in another branch or tree.
    fn cross_edge(&mut self, edge: E) -> Control {
        Control::Continue
    }

    /// `vertex` turned Black.
    fn finish_vertex(&mut self, vertex: V) -> Control {
        Control::Continue
    }
}

impl<V, E, T> Visitor<V, E> for &mut T
where
    T: Visitor<V, E> + ?Sized,
{
    fn start_vertex(&mut self, vertex: V) -> Control {
        (**self).start_vertex(vertex)
    }
    fn discover_vertex(&mut self, vertex: V) -> Control {
        (**self).discover_vertex(vertex)
    }
    fn examine_vertex(&mut self, vertex: V) -> Control {
        (**self).examine_vertex(vertex)
    }
    fn examine_edge(&mut self, edge: E) -> Control {
        (**self).examine_edge(edge)
    }
    fn tree_edge(&mut self, edge: E) -> Control {
        (**self).tree_edge(edge)
    }
    fn non_tree_edge(&mut self, edge: E) -> Control {
        (**self).non_tree_edge(edge)
    }
    fn back_edge(&mut self, edge: E) -> Control {
        (**self).back_edge(edge)
    }
    fn forward_edge(&mut self, edge: E) -> Control {
        (**self).forward_edge(edge)
    }
    fn cross_edge(&mut self, edge: E) -> Control {
        (**self).cross_edge(edge)
    }
    fn finish_vertex(&mut self, vertex: V) -> Control {
        (**self).finish_vertex(vertex)
    }
}

/// Runs two visitors side by side; the stronger verdict wins.
impl<V: Copy, E: Copy, A, B> Visitor<V, E> for (A, B)
where
    A: Visitor<V, E>,
    B: Visitor<V, E>,
{
    fn start_vertex(&mut self, vertex: V) -> Control {
        self.0.start_vertex(vertex).strongest(self.1.start_vertex(vertex))
    }
    fn discover_vertex(&mut self, vertex: V) -> Control {
        self.0
            .discover_vertex(vertex)
            .strongest(self.1.discover_vertex(vertex))
    }
    fn examine_vertex(&mut self, vertex: V) -> Control {
        self.0
            .examine_vertex(vertex)
            .strongest(self.1.examine_vertex(vertex))
    }
    fn examine_edge(&mut self, edge: E) -> Control {
        self.0.examine_edge(edge).strongest(self.1.examine_edge(edge))
    }
    fn tree_edge(&mut self, edge: E) -> Control {
        self.0.tree_edge(edge).strongest(self.1.tree_edge(edge))
    }
    fn non_tree_edge(&mut self, edge: E) -> Control {
        self.0.non_tree_edge(edge).strongest(self.1.non_tree_edge(edge))
    }
    fn back_edge(&mut self, edge: E) -> Control {
        self.0.back_edge(edge).strongest(self.1.back_edge(edge))
    }
    fn forward_edge(&mut self, edge: E) -> Control {
        self.0.forward_edge(edge).strongest(self.1.forward_edge(edge))
    }
    fn cross_edge(&mut self, edge: E) -> Control {
        self.0.cross_edge(edge).strongest(self.1.cross_edge(edge))
    }
    fn finish_vertex(&mut self, vertex: V) -> Control {
        self.0
            .finish_vertex(vertex)
            .strongest(self.1.finish_vertex(vertex))
    }
}

/// Outcome of discovering a vertex.
enum Discovery {
    Expand,
    Pruned,
    Stopped,
}

/// Returns `Stopped` from the enclosing function on `Break`, otherwise
/// evaluates to the verdict.
macro_rules! emit {
    ($event:expr) => {
        match $event {
            Control::Break => return TraversalStatus::Stopped,
            verdict => verdict,
        }
    };
}

/// Reusable walk state over one graph.
///
/// Colors persist across [`visit_from`](Traversal::visit_from) calls, so
/// several roots can be walked without revisiting vertices, exactly like the
/// whole-graph walk does.
pub struct Traversal<'g, G: IncidenceGraph> {
    graph: &'g G,
    order: TraversalOrder,
    colors: ColorMap<G::Vertex>,
    discovery: HashMap<G::Vertex, usize>,
}

impl<'g, G: IncidenceGraph> Traversal<'g, G> {
    /// Prepares a walk in the given order with every vertex White.
    pub fn new(graph: &'g G, order: TraversalOrder) -> Self {
        Self {
            graph,
            order,
            colors: ColorMap::new(),
            discovery: HashMap::new(),
        }
    }

    /// The walk order.
    pub fn order(&self) -> TraversalOrder {
        self.order
    }

    /// Current color of every vertex.
    pub fn colors(&self) -> &ColorMap<G::Vertex> {
        &self.colors
    }

    /// Consumes the walk, returning its color map.
    pub fn into_colors(self) -> ColorMap<G::Vertex> {
        self.colors
    }

    /// Walks every vertex reachable from `root` that is still White.
    ///
    /// A `Prune` from `start_vertex` skips the root: nothing is discovered
    /// and the walk reports `Completed`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] if `root` is not in the graph.
    pub fn visit_from<Vis>(&mut self, root: G::Vertex, visitor: &mut Vis) -> Result<TraversalStatus>
    where
        Vis: Visitor<G::Vertex, G::Edge>,
    {
        if !self.graph.contains_vertex(root) {
            return Err(GraphError::vertex_not_found(root));
        }
        Ok(self.start(root, visitor))
    }

    /// Walks the whole graph, restarting at each still-White vertex in
    /// enumeration order so disconnected parts are covered. Roots pruned by
    /// `start_vertex` are skipped, though a later walk may still reach them.
    pub fn visit_all<Vis>(&mut self, visitor: &mut Vis) -> TraversalStatus
    where
        G: VertexListGraph,
        Vis: Visitor<G::Vertex, G::Edge>,
    {
        let graph = self.graph;
        for root in graph.vertices() {
            if self.start(root, visitor) == TraversalStatus::Stopped {
                return TraversalStatus::Stopped;
            }
        }
        TraversalStatus::Completed
    }

    fn start<Vis>(&mut self, root: G::Vertex, visitor: &mut Vis) -> TraversalStatus
    where
        Vis: Visitor<G::Vertex, G::Edge>,
    {
        if !self.colors.is_white(root) {
            return TraversalStatus::Completed;
        }
        match visitor.start_vertex(root) {
            Control::Break => TraversalStatus::Stopped,
            Control::Prune => TraversalStatus::Completed,
            Control::Continue => self.walk(root, visitor),
        }
    }

    fn walk<Vis>(&mut self, root: G::Vertex, visitor: &mut Vis) -> TraversalStatus
    where
        Vis: Visitor<G::Vertex, G::Edge>,
    {
        match self.order {
            TraversalOrder::BreadthFirst => self.bfs(root, visitor),
            TraversalOrder::DepthFirst => self.dfs(root, visitor),
        }
    }

    /// Marks `vertex` Gray and reports it. A pruned vertex is finished on
    /// the spot.
    fn discover<Vis>(&mut self, vertex: G::Vertex, visitor: &mut Vis) -> Discovery
    where
        Vis: Visitor<G::Vertex, G::Edge>,
    {
        self.colors.set(vertex, Color::Gray);
        let index = self.discovery.len();
        self.discovery.insert(vertex, index);
        match visitor.discover_vertex(vertex) {
            Control::Break => Discovery::Stopped,
            Control::Prune => {
                self.colors.set(vertex, Color::Black);
                if visitor.finish_vertex(vertex) == Control::Break {
                    return Discovery::Stopped;
                }
                Discovery::Pruned
            }
            Control::Continue => Discovery::Expand,
        }
    }

    fn bfs<Vis>(&mut self, root: G::Vertex, visitor: &mut Vis) -> TraversalStatus
    where
        Vis: Visitor<G::Vertex, G::Edge>,
    {
        let graph = self.graph;
        let mut queue = VecDeque::new();
        match self.discover(root, visitor) {
            Discovery::Stopped => return TraversalStatus::Stopped,
            Discovery::Pruned => return TraversalStatus::Completed,
            Discovery::Expand => queue.push_back(root),
        }

        while let Some(u) = queue.pop_front() {
            if emit!(visitor.examine_vertex(u)) != Control::Prune {
                for edge in graph.out_edges(u) {
                    if emit!(visitor.examine_edge(edge)) == Control::Prune {
                        continue;
                    }
                    let v = edge.target();
                    if self.colors.is_white(v) {
                        if emit!(visitor.tree_edge(edge)) == Control::Prune {
                            continue;
                        }
                        match self.discover(v, visitor) {
                            Discovery::Stopped => return TraversalStatus::Stopped,
                            Discovery::Expand => queue.push_back(v),
                            Discovery::Pruned => {}
                        }
                    } else {
                        emit!(visitor.non_tree_edge(edge));
                    }
                }
            }
            self.colors.set(u, Color::Black);
            emit!(visitor.finish_vertex(u));
        }
        TraversalStatus::Completed
    }

    fn dfs<Vis>(&mut self, root: G::Vertex, visitor: &mut Vis) -> TraversalStatus
    where
        Vis: Visitor<G::Vertex, G::Edge>,
    {
        let graph = self.graph;
        match self.discover(root, visitor) {
            Discovery::Stopped => return TraversalStatus::Stopped,
            Discovery::Pruned => return TraversalStatus::Completed,
            Discovery::Expand => {}
        }

        let mut stack = vec![(root, graph.out_edges(root))];
        loop {
            let Some((u, edges)) = stack.last_mut() else {
                break;
            };
            let u = *u;
            let Some(edge) = edges.next() else {
                stack.pop();
                self.colors.set(u, Color::Black);
                emit!(visitor.finish_vertex(u));
                continue;
            };

            if emit!(visitor.examine_edge(edge)) == Control::Prune {
                continue;
            }
            let v = edge.target();
            match self.colors.get(v) {
                Color::White => {
                    if emit!(visitor.tree_edge(edge)) == Control::Prune {
                        continue;
                    }
                    match self.discover(v, visitor) {
                        Discovery::Stopped => return TraversalStatus::Stopped,
                        Discovery::Expand => stack.push((v, graph.out_edges(v))),
                        Discovery::Pruned => {}
                    }
                }
                Color::Gray => {
                    emit!(visitor.back_edge(edge));
                }
                Color::Black => {
                    if self.discovery.get(&u) < self.discovery.get(&v) {
                        emit!(visitor.forward_edge(edge));
                    } else {
                        emit!(visitor.cross_edge(edge));
                    }
                }
            }
        }
        TraversalStatus::Completed
    }
}

/// Breadth-first walk from `root`.
///
/// # Errors
/// Returns [`GraphError::VertexNotFound`] if `root` is not in the graph.
pub fn breadth_first_search<G, Vis>(graph: &G, root: G::Vertex, visitor: &mut Vis) -> Result<TraversalStatus>
where
    G: IncidenceGraph,
    Vis: Visitor<G::Vertex, G::Edge>,
{
    traverse(graph, root, TraversalOrder::BreadthFirst, visitor)
}

/// Depth-first walk from `root`.
///
/// # Errors
/// Returns [`GraphError::VertexNotFound`] if `root` is not in the graph.
pub fn depth_first_search<G, Vis>(graph: &G, root: G::Vertex, visitor: &mut Vis) -> Result<TraversalStatus>
where
    G: IncidenceGraph,
    Vis: Visitor<G::Vertex, G::Edge>,
{
    traverse(graph, root, TraversalOrder::DepthFirst, visitor)
}

/// Walks every vertex reachable from `root` in the given order.
///
/// # Errors
/// Returns [`GraphError::VertexNotFound`] if `root` is not in the graph.
pub fn traverse<G, Vis>(
    graph: &G,
    root: G::Vertex,
    order: TraversalOrder,
    visitor: &mut Vis,
) -> Result<TraversalStatus>
where
    G: IncidenceGraph,
    Vis: Visitor<G::Vertex, G::Edge>,
{
    Traversal::new(graph, order).visit_from(root, visitor)
}

/// Walks every vertex of the graph, restarting at each still-White vertex.
pub fn traverse_all<G, Vis>(graph: &G, order: TraversalOrder, visitor: &mut Vis) -> TraversalStatus
where
    G: VertexListGraph + IncidenceGraph,
    Vis: Visitor<G::Vertex, G::Edge>,
{
    Traversal::new(graph, order).visit_all(visitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AdjacencyGraph, Edge};

    #[derive(Default)]
    struct Log {
        events: Vec<String>,
    }

    impl Visitor<u32, Edge<u32>> for Log {
        fn discover_vertex(&mut self, v: u32) -> Control {
            self.events.push(format!("d{v}"));
            Control::Continue
        }
        fn tree_edge(&mut self, e: Edge<u32>) -> Control {
            self.events.push(format!("t{}{}", e.source(), e.target()));
            Control::Continue
        }
        fn back_edge(&mut self, e: Edge<u32>) -> Control {
            self.events.push(format!("b{}{}", e.source(), e.target()));
            Control::Continue
        }
        fn forward_edge(&mut self, e: Edge<u32>) -> Control {
            self.events.push(format!("f{}{}", e.source(), e.target()));
            Control::Continue
        }
        fn cross_edge(&mut self, e: Edge<u32>) -> Control {
            self.events.push(format!("c{}{}", e.source(), e.target()));
            Control::Continue
        }
        fn non_tree_edge(&mut self, e: Edge<u32>) -> Control {
            self.events.push(format!("n{}{}", e.source(), e.target()));
            Control::Continue
        }
        fn finish_vertex(&mut self, v: u32) -> Control {
            self.events.push(format!("x{v}"));
            Control::Continue
        }
    }

    #[test]
    fn dfs_classifies_every_edge_kind() {
        // 0 -> 1 -> 2 -> 0 (back), 0 -> 2 (forward), 3 -> 2 (cross)
        let g = AdjacencyGraph::from_edges([(0, 1), (1, 2), (2, 0), (0, 2), (3, 2)]);
        let mut log = Log::default();
        let status = traverse_all(&g, TraversalOrder::DepthFirst, &mut log);
        assert_eq!(status, TraversalStatus::Completed);
        assert_eq!(
            log.events,
            vec!["d0", "t01", "d1", "t12", "d2", "b20", "x2", "x1", "f02", "x0", "d3", "c32", "x3"]
        );
    }

    #[test]
    fn bfs_visits_level_by_level() {
        let g = AdjacencyGraph::from_edges([(0, 1), (0, 2), (1, 3), (2, 3)]);
        let mut log = Log::default();
        breadth_first_search(&g, 0, &mut log).unwrap();
        assert_eq!(
            log.events,
            vec!["d0", "t01", "d1", "t02", "d2", "x0", "t13", "d3", "x1", "n23", "x2", "x3"]
        );
    }

    #[test]
    fn unknown_root_is_an_argument_error() {
        let g = AdjacencyGraph::from_edges([(0, 1)]);
        let err = depth_first_search(&g, 9, &mut Log::default()).unwrap_err();
        assert_eq!(err, GraphError::VertexNotFound("9".into()));
    }

    struct StopAt(u32, usize);

    impl Visitor<u32, Edge<u32>> for StopAt {
        fn discover_vertex(&mut self, v: u32) -> Control {
            self.1 += 1;
            if v == self.0 {
                Control::Break
            } else {
                Control::Continue
            }
        }
    }

    #[test]
    fn break_stops_the_walk() {
        let g = AdjacencyGraph::from_edges([(0, 1), (1, 2), (2, 3)]);
        let mut stop = StopAt(2, 0);
        let status = depth_first_search(&g, 0, &mut stop).unwrap();
        assert_eq!(status, TraversalStatus::Stopped);
        assert_eq!(stop.1, 3);
    }

    struct PruneAt(u32);

    impl Visitor<u32, Edge<u32>> for PruneAt {
        fn discover_vertex(&mut self, v: u32) -> Control {
            if v == self.0 {
                Control::Prune
            } else {
                Control::Continue
            }
        }
    }

    #[test]
    fn prune_skips_subtree() {
        let g = AdjacencyGraph::from_edges([(0, 1), (1, 2), (0, 3)]);
        for order in [TraversalOrder::BreadthFirst, TraversalOrder::DepthFirst] {
            let mut walk = Traversal::new(&g, order);
            let status = walk.visit_from(0, &mut PruneAt(1)).unwrap();
            assert_eq!(status, TraversalStatus::Completed);
            assert_eq!(walk.colors().get(1), Color::Black);
            assert_eq!(walk.colors().get(2), Color::White);
            assert_eq!(walk.colors().get(3), Color::Black);
        }
    }

    #[test]
    fn deep_chain_does_not_overflow() {
        let n = 200_000u32;
        let g = AdjacencyGraph::from_edges((0..n).map(|i| (i, i + 1)));
        let mut walk = Traversal::new(&g, TraversalOrder::DepthFirst);
        walk.visit_from(0, &mut PruneAt(u32::MAX)).unwrap();
        assert_eq!(walk.colors().get(n), Color::Black);
    }

    struct SkipRoot(u32);

    impl Visitor<u32, Edge<u32>> for SkipRoot {
        fn start_vertex(&mut self, v: u32) -> Control {
            if v == self.0 {
                Control::Prune
            } else {
                Control::Continue
            }
        }
    }

    #[test]
    fn pruned_start_is_skipped_by_both_entry_points() {
        let g = AdjacencyGraph::from_edges([(0, 1), (2, 0)]);
        for order in [TraversalOrder::BreadthFirst, TraversalOrder::DepthFirst] {
            let mut walk = Traversal::new(&g, order);
            let status = walk.visit_from(0, &mut SkipRoot(0)).unwrap();
            assert_eq!(status, TraversalStatus::Completed);
            assert_eq!(walk.colors().get(0), Color::White);
            assert_eq!(walk.colors().get(1), Color::White);

            // The whole-graph walk skips 0 as a root but reaches it from 2.
            let mut walk = Traversal::new(&g, order);
            assert_eq!(walk.visit_all(&mut SkipRoot(0)), TraversalStatus::Completed);
            assert_eq!(walk.colors().get(0), Color::Black);
            assert_eq!(walk.colors().get(1), Color::Black);
        }
    }
}
