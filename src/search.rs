//! Breadth-first and depth-first traversal iterators.
//!
//! Both iterators borrow the graph for the whole traversal, so the borrow
//! checker rules out mutating the graph from inside a visitor.  Each keeps a
//! per-traversal visited set; a vertex may sit in the frontier more than
//! once, but only its first removal is yielded.  Sibling order follows the
//! adjacency sets' hash iteration order and is unspecified.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

use crate::graph::Graph;

/// Breadth-first iterator over the vertices reachable from a root.
///
/// Yields each reachable vertex exactly once, in non-decreasing distance
/// from the root.  Created by [`Graph::bfs_iter`].
pub struct BfsIter<'g, V> {
    graph: &'g Graph<V>,
    visited: HashSet<&'g V>,
    queue: VecDeque<&'g V>,
}

impl<'g, V> BfsIter<'g, V>
where
    V: Eq + Hash + Clone,
{
    pub(crate) fn new(graph: &'g Graph<V>, root: &'g V) -> Self {
        Self {
            graph,
            visited: HashSet::new(),
            queue: VecDeque::from([root]),
        }
    }
}

impl<'g, V> Iterator for BfsIter<'g, V>
where
    V: Eq + Hash + Clone,
{
    type Item = &'g V;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(v) = self.queue.pop_front() {
            if !self.visited.insert(v) {
                continue;
            }
            for neighbor in self.graph.neighbors(v) {
                if !self.visited.contains(neighbor) {
                    self.queue.push_back(neighbor);
                }
            }
            return Some(v);
        }
        None
    }
}

/// Depth-first iterator over the vertices reachable from a root.
///
/// Yields each reachable vertex exactly once.  Created by
/// [`Graph::dfs_iter`].
pub struct DfsIter<'g, V> {
    graph: &'g Graph<V>,
    visited: HashSet<&'g V>,
    stack: Vec<&'g V>,
}

impl<'g, V> DfsIter<'g, V>
where
    V: Eq + Hash + Clone,
{
    pub(crate) fn new(graph: &'g Graph<V>, root: &'g V) -> Self {
        Self {
            graph,
            visited: HashSet::new(),
            stack: vec![root],
        }
    }
}

impl<'g, V> Iterator for DfsIter<'g, V>
where
    V: Eq + Hash + Clone,
{
    type Item = &'g V;

    // The stack top is re-read on every iteration; no vertex reference is
    // carried across pushes or pops.
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(v) = self.stack.pop() {
            if !self.visited.insert(v) {
                continue;
            }
            for neighbor in self.graph.neighbors(v) {
                if !self.visited.contains(neighbor) {
                    self.stack.push(neighbor);
                }
            }
            return Some(v);
        }
        None
    }
}
