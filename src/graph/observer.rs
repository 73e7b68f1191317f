//! Mutation notification for observable graphs.
//!
//! A mutable graph owns an [`ObserverList`] and calls its `notify_*` methods
//! from inside each successful mutation, so observers see every change before
//! the mutating call returns.
//!
//! Observers are held through [`Weak`] references. Dropping the last strong
//! reference is enough to stop notifications; dead entries are pruned the next
//! time the list fires. This keeps the graph from extending an observer's
//! lifetime and lets a scoped analyzer release itself on drop without needing
//! access to the graph.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};

/// Receives structural change notifications. Every method defaults to a no-op.
pub trait GraphObserver<V, E> {
    /// A vertex was added.
    fn vertex_added(&mut self, _vertex: V) {}

    /// A vertex was removed (after its incident edges were removed).
    fn vertex_removed(&mut self, _vertex: V) {}

    /// An edge was added.
    fn edge_added(&mut self, _edge: E) {}

    /// An edge was removed.
    fn edge_removed(&mut self, _edge: E) {}
}

/// Handle returned by a subscription, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Raw numeric value.
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

type Slot<V, E> = (SubscriptionId, Weak<RefCell<dyn GraphObserver<V, E>>>);

/// The observer registry embedded in an observable graph.
pub struct ObserverList<V, E> {
    observers: Vec<Slot<V, E>>,
    next_id: u64,
}

impl<V: Copy, E: Copy> ObserverList<V, E> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Registers a weakly-held observer.
    pub fn subscribe(&mut self, observer: Weak<RefCell<dyn GraphObserver<V, E>>>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        tracing::trace!(subscription = id.0, "observer subscribed");
        id
    }

    /// Removes a subscription. Returns `false` if the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(slot, _)| *slot != id);
        let removed = self.observers.len() != before;
        if removed {
            tracing::trace!(subscription = id.0, "observer unsubscribed");
        }
        removed
    }

    /// Number of subscriptions whose observer is still alive.
    pub fn live_count(&self) -> usize {
        self.observers
            .iter()
            .filter(|(_, weak)| weak.strong_count() > 0)
            .count()
    }

    /// Returns `true` if no observer is registered.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Notifies observers of a new vertex.
    pub fn notify_vertex_added(&mut self, vertex: V) {
        self.notify(|obs| obs.vertex_added(vertex));
    }

    /// Notifies observers of a removed vertex.
    pub fn notify_vertex_removed(&mut self, vertex: V) {
        self.notify(|obs| obs.vertex_removed(vertex));
    }

    /// Notifies observers of a new edge.
    pub fn notify_edge_added(&mut self, edge: E) {
        self.notify(|obs| obs.edge_added(edge));
    }

    /// Notifies observers of a removed edge.
    pub fn notify_edge_removed(&mut self, edge: E) {
        self.notify(|obs| obs.edge_removed(edge));
    }

    fn notify<F>(&mut self, mut event: F)
    where
        F: FnMut(&mut (dyn GraphObserver<V, E> + 'static)),
    {
        if self.observers.is_empty() {
            return;
        }
        let mut any_dead = false;
        for (_, weak) in &self.observers {
            match weak.upgrade() {
                Some(observer) => {
                    let mut guard = observer.borrow_mut();
                    event(&mut *guard);
                }
                None => any_dead = true,
            }
        }
        if any_dead {
            self.observers.retain(|(_, weak)| weak.strong_count() > 0);
        }
    }
}

impl<V: Copy, E: Copy> Default for ObserverList<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> core::fmt::Debug for ObserverList<V, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ObserverList")
            .field("subscriptions", &self.observers.len())
            .finish()
    }
}

/// Downgrades a concrete shared observer to the weak, type-erased form
/// accepted by [`ObserverList::subscribe`].
pub fn downgrade_observer<V, E, O>(observer: &Rc<RefCell<O>>) -> Weak<RefCell<dyn GraphObserver<V, E>>>
where
    O: GraphObserver<V, E> + 'static,
{
    let erased: Rc<RefCell<dyn GraphObserver<V, E>>> = observer.clone();
    Rc::downgrade(&erased)
}
