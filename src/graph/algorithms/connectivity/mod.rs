//! Connected component analysis.
//!
//! - [`weakly_connected_components`]: components of the underlying undirected
//!   graph.
//! - [`strongly_connected_components`]: Tarjan's low-link algorithm; ids come
//!   out in reverse topological order of the condensation.
//! - [`IncrementalComponents`]: a live union-find view kept current by the
//!   graph's mutation notifications.

mod incremental;
mod strong;
mod weak;

pub use incremental::IncrementalComponents;
pub use strong::strongly_connected_components;
pub use weak::weakly_connected_components;

use core::hash::Hash;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A component id in `[0, count)` for every vertex.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "V: Serialize",
    deserialize = "V: Deserialize<'de> + Eq + Hash"
))]
pub struct ComponentLabeling<V> {
    /// Number of components.
    pub count: usize,
    /// Component id of each vertex.
    pub labels: HashMap<V, usize>,
}

impl<V: Eq + Hash> PartialEq for ComponentLabeling<V> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.labels == other.labels
    }
}

impl<V: Eq + Hash> Eq for ComponentLabeling<V> {}

impl<V: Copy + Eq + Hash> ComponentLabeling<V> {
    /// Component id of `vertex`.
    #[inline]
    pub fn component_of(&self, vertex: V) -> Option<usize> {
        self.labels.get(&vertex).copied()
    }

    /// Returns `true` if both vertices are labelled and share a component.
    pub fn same_component(&self, a: V, b: V) -> bool {
        match (self.component_of(a), self.component_of(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    /// Members of each component, indexed by id. Members appear in the order
    /// of `vertices`. Labels outside `[0, count)` are skipped.
    pub fn groups<I>(&self, vertices: I) -> Vec<Vec<V>>
    where
        I: IntoIterator<Item = V>,
    {
        let mut groups = vec![Vec::new(); self.count];
        for v in vertices {
            if let Some(group) = self.component_of(v).and_then(|id| groups.get_mut(id)) {
                group.push(v);
            }
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labeling(count: usize, labels: &[(u32, usize)]) -> ComponentLabeling<u32> {
        ComponentLabeling {
            count,
            labels: labels.iter().copied().collect(),
        }
    }

    #[test]
    fn equality_ignores_map_order() {
        let a = labeling(2, &[(1, 0), (2, 0), (3, 1)]);
        let b = labeling(2, &[(3, 1), (2, 0), (1, 0)]);
        assert_eq!(a, b);
        assert_ne!(a, labeling(3, &[(1, 0), (2, 0), (3, 1)]));
    }

    #[test]
    fn groups_skip_out_of_range_labels() {
        let decoded: ComponentLabeling<u32> =
            serde_json::from_str(r#"{"count": 2, "labels": {"1": 0, "2": 1, "3": 7}}"#).unwrap();
        assert_eq!(decoded.groups([1, 2, 3]), vec![vec![1], vec![2]]);
        assert_eq!(decoded.component_of(3), Some(7));
    }
}
