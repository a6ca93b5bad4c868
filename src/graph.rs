//! The [`Graph`] container: an adjacency map from each vertex value to the
//! set of its neighbors.
//!
//! The container is permissive by design: mutation and query operations that
//! name absent vertices or edges do nothing (or answer `false`) instead of
//! failing.  The one signaled error in the crate is starting a traversal
//! from an absent vertex, see [`Graph::bfs_iter`] and [`Graph::dfs_iter`].
//!
//! Vertices are identified by value: any `V: Eq + Hash + Clone` works as a
//! vertex type, and two values equal under `V`'s `Eq` are the same vertex.
//! There is no separate edge object; an edge between `a` and `b` is the fact
//! that each appears in the other's adjacency set, and every mutation keeps
//! that membership symmetric.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use derivative::Derivative;

use crate::error::GraphError;
use crate::search::{BfsIter, DfsIter};

/// An undirected graph over vertex values of type `V`.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "V: Clone"),
    Debug(bound = "V: Debug"),
    Default(bound = ""),
    PartialEq(bound = "V: Eq + Hash"),
    Eq(bound = "V: Eq + Hash")
)]
pub struct Graph<V> {
    adjacency: HashMap<V, HashSet<V>>,
}

impl<V> Graph<V>
where
    V: Eq + Hash + Clone,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Graph {
            adjacency: HashMap::new(),
        }
    }

    /// Adds a vertex with no neighbors.  Adding a vertex that is already
    /// present does nothing; in particular its adjacency is preserved.
    pub fn add_vertex(&mut self, v: V) {
        self.adjacency.entry(v).or_default();
    }

    /// Removes a vertex and every edge incident to it.  Removing an absent
    /// vertex does nothing.
    ///
    /// No reverse-edge index is kept, so this scans every remaining vertex's
    /// adjacency set: O(order × average degree).
    pub fn remove_vertex(&mut self, v: &V) {
        if self.adjacency.remove(v).is_none() {
            return;
        }
        for neighbors in self.adjacency.values_mut() {
            neighbors.remove(v);
        }
    }

    /// Adds the undirected edge `a`–`b`, recording each endpoint in the
    /// other's adjacency set.  Does nothing unless both vertices are present
    /// and distinct; adding an existing edge changes nothing.
    pub fn add_edge(&mut self, a: &V, b: &V) {
        if a == b || !self.adjacency.contains_key(a) || !self.adjacency.contains_key(b) {
            return;
        }
        if let Some(neighbors) = self.adjacency.get_mut(a) {
            neighbors.insert(b.clone());
        }
        if let Some(neighbors) = self.adjacency.get_mut(b) {
            neighbors.insert(a.clone());
        }
    }

    /// Removes the undirected edge `a`–`b` from both endpoints' adjacency
    /// sets.  Does nothing if either vertex is absent or the edge does not
    /// exist.
    pub fn remove_edge(&mut self, a: &V, b: &V) {
        if !self.adjacency.get(a).is_some_and(|n| n.contains(b)) {
            return;
        }
        if let Some(neighbors) = self.adjacency.get_mut(a) {
            neighbors.remove(b);
        }
        if let Some(neighbors) = self.adjacency.get_mut(b) {
            neighbors.remove(a);
        }
    }

    /// Returns the order of the graph, i.e. the number of vertices.
    pub fn order(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the size of the graph, i.e. the number of edges.  Each
    /// undirected edge is counted once.
    pub fn size(&self) -> usize {
        self.adjacency.values().map(HashSet::len).sum::<usize>() / 2
    }

    /// Returns true if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns true if `v` is a vertex of the graph.
    pub fn contains(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    /// Returns true iff both vertices are present and each appears in the
    /// other's adjacency set.  Absent vertices answer `false`, never an
    /// error.
    pub fn is_edge(&self, a: &V, b: &V) -> bool {
        self.adjacency.get(a).is_some_and(|n| n.contains(b))
            && self.adjacency.get(b).is_some_and(|n| n.contains(a))
    }

    /// Gets an iterator over all vertex values, in no particular order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    /// Gets an iterator over the neighbors of `v`, in no particular order.
    /// Empty if `v` is absent.
    pub fn neighbors(&self, v: &V) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.get(v).into_iter().flatten()
    }

    /// Performs a breadth-first search starting from `root`, yielding each
    /// reachable vertex exactly once in non-decreasing distance from `root`.
    /// The order among vertices at the same distance is unspecified.
    ///
    /// Fails with [`GraphError::VertexNotFound`] if `root` is not a vertex
    /// of the graph.
    pub fn bfs_iter(&self, root: &V) -> Result<BfsIter<'_, V>, GraphError> {
        let root = self.owned_key(root)?;
        Ok(BfsIter::new(self, root))
    }

    /// Performs a depth-first search starting from `root`, yielding each
    /// reachable vertex exactly once in a depth-first expansion order.
    ///
    /// Fails with [`GraphError::VertexNotFound`] if `root` is not a vertex
    /// of the graph.
    pub fn dfs_iter(&self, root: &V) -> Result<DfsIter<'_, V>, GraphError> {
        let root = self.owned_key(root)?;
        Ok(DfsIter::new(self, root))
    }

    /// Runs a breadth-first search from `root`, invoking `visitor` once per
    /// reachable vertex in the order of [`Graph::bfs_iter`].
    pub fn bfs(&self, root: &V, mut visitor: impl FnMut(&V)) -> Result<(), GraphError> {
        for v in self.bfs_iter(root)? {
            visitor(v);
        }
        Ok(())
    }

    /// Runs a depth-first search from `root`, invoking `visitor` once per
    /// reachable vertex in the order of [`Graph::dfs_iter`].
    pub fn dfs(&self, root: &V, mut visitor: impl FnMut(&V)) -> Result<(), GraphError> {
        for v in self.dfs_iter(root)? {
            visitor(v);
        }
        Ok(())
    }

    /// Resolves `v` to the graph-owned key with the graph's lifetime, so
    /// traversal state can hold borrows instead of clones.
    fn owned_key(&self, v: &V) -> Result<&V, GraphError> {
        self.adjacency
            .get_key_value(v)
            .map(|(key, _)| key)
            .ok_or(GraphError::VertexNotFound)
    }
}
