use core::fmt::Debug;
use core::hash::Hash;
use core::marker::PhantomData;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::collections::ForestDisjointSet;
use crate::graph::observer::{downgrade_observer, GraphObserver, SubscriptionId};
use crate::graph::traits::{EdgeListGraph, GraphEdge, ObservableGraph, VertexListGraph};

struct Forest<V> {
    sets: ForestDisjointSet<V>,
}

impl<V, E> GraphObserver<V, E> for Forest<V>
where
    V: Copy + Eq + Hash + Debug,
    E: GraphEdge<Vertex = V>,
{
    fn vertex_added(&mut self, vertex: V) {
        self.sets.make_set(vertex);
    }

    fn edge_added(&mut self, edge: E) {
        match self.sets.union(&edge.source(), &edge.target()) {
            Ok(true) => {
                tracing::trace!(edge = ?edge, sets = self.sets.set_count(), "components merged");
            }
            Ok(false) => {}
            Err(err) => tracing::warn!(%err, "edge endpoint unknown to incremental components"),
        }
    }
}

/// Connected components kept up to date while the graph grows.
///
/// On attach, every existing vertex becomes a singleton and every existing
/// edge is unioned. From then on the graph's notifications do the same for
/// each added vertex and edge. Removals are not tracked: components only
/// merge.
///
/// The graph holds the analyzer weakly. Dropping it (or calling
/// [`detach`](Self::detach)) ends the subscription; later mutations have no
/// effect on it.
pub struct IncrementalComponents<V, E> {
    forest: Rc<RefCell<Forest<V>>>,
    subscription: SubscriptionId,
    _edge: PhantomData<fn(E)>,
}

impl<V, E> IncrementalComponents<V, E>
where
    V: Copy + Eq + Hash + Debug + 'static,
    E: GraphEdge<Vertex = V> + 'static,
{
    /// Seeds the forest from `graph` and subscribes to its growth.
    pub fn attach<G>(graph: &mut G) -> Self
    where
        G: VertexListGraph + EdgeListGraph + ObservableGraph<Vertex = V, Edge = E>,
    {
        let mut sets = ForestDisjointSet::with_capacity(graph.vertex_count());
        for v in graph.vertices() {
            sets.make_set(v);
        }
        let mut forest = Forest { sets };
        for edge in graph.edges() {
            GraphObserver::<V, E>::edge_added(&mut forest, edge);
        }

        let forest = Rc::new(RefCell::new(forest));
        let subscription = graph.subscribe(downgrade_observer::<V, E, _>(&forest));
        tracing::debug!(
            subscription = subscription.get(),
            components = forest.borrow().sets.set_count(),
            "incremental components attached"
        );
        Self {
            forest,
            subscription,
            _edge: PhantomData,
        }
    }

    /// Number of components right now.
    pub fn component_count(&self) -> usize {
        self.forest.borrow().sets.set_count()
    }

    /// Representative vertex of `vertex`'s component.
    pub fn representative(&self, vertex: V) -> Option<V> {
        self.forest.borrow().sets.find(&vertex).copied()
    }

    /// Returns `true` if both vertices are known and connected.
    pub fn same_component(&self, a: V, b: V) -> bool {
        self.forest.borrow().sets.are_in_same_set(&a, &b)
    }

    /// Current component count and the representative of every vertex.
    pub fn snapshot(&self) -> (usize, HashMap<V, V>) {
        let forest = self.forest.borrow();
        let representatives = forest
            .sets
            .elements()
            .filter_map(|v| forest.sets.find(v).map(|root| (*v, *root)))
            .collect();
        (forest.sets.set_count(), representatives)
    }

    /// Unsubscribes from `graph` right away instead of waiting for the next
    /// notification to prune the dead observer.
    pub fn detach<G>(self, graph: &mut G)
    where
        G: ObservableGraph<Vertex = V, Edge = E>,
    {
        graph.unsubscribe(self.subscription);
        tracing::debug!(subscription = self.subscription.get(), "incremental components detached");
    }
}

impl<V, E> Debug for IncrementalComponents<V, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IncrementalComponents")
            .field("subscription", &self.subscription)
            .finish_non_exhaustive()
    }
}
