//! Support code for property tests: a random graph generator and oracles
//! computed independently of the traversal code.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use quickcheck::Arbitrary;

use crate::graph::Graph;
use crate::tracing_support::{info_span, init_tracing};

/// A randomly generated `Graph<u16>` for quickcheck properties.  Vertex
/// values are drawn from a small range so that edge endpoints collide and
/// idempotent paths get exercised.
#[derive(Clone, Debug)]
pub struct ArbGraph {
    pub graph: Graph<u16>,
}

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % 20;
        let num_edges = usize::arbitrary(g) % 50;

        let mut graph = Graph::new();
        let vertices: Vec<u16> = (0..num_vertices).map(|_| u16::arbitrary(g) % 32).collect();
        for &v in &vertices {
            graph.add_vertex(v);
        }
        for _ in 0..num_edges {
            if vertices.len() < 2 {
                break;
            }
            let a = vertices[usize::arbitrary(g) % vertices.len()];
            let b = vertices[usize::arbitrary(g) % vertices.len()];
            graph.add_edge(&a, &b);
        }

        ArbGraph { graph }
    }
}

pub fn has_duplicates<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return true;
        }
    }
    false
}

/// Computes the set of vertices reachable from `root` by fixpoint over
/// `is_edge`, without touching the traversal iterators.
pub fn reachable_set<V>(graph: &Graph<V>, root: &V) -> HashSet<V>
where
    V: Eq + Hash + Clone,
{
    let mut reachable = HashSet::new();
    if !graph.contains(root) {
        return reachable;
    }
    reachable.insert(root.clone());
    loop {
        let mut grew = false;
        for u in graph.vertices() {
            if reachable.contains(u) {
                continue;
            }
            if reachable.iter().any(|r| graph.is_edge(r, u)) {
                reachable.insert(u.clone());
                grew = true;
            }
        }
        if !grew {
            return reachable;
        }
    }
}

/// Computes the distance from `root` to every reachable vertex, expanding
/// one distance layer at a time via `is_edge`.
pub fn distances<V>(graph: &Graph<V>, root: &V) -> HashMap<V, usize>
where
    V: Eq + Hash + Clone,
{
    let mut dist = HashMap::new();
    if !graph.contains(root) {
        return dist;
    }
    dist.insert(root.clone(), 0);
    let mut frontier = vec![root.clone()];
    let mut layer = 0;
    while !frontier.is_empty() {
        layer += 1;
        let mut next = Vec::new();
        for u in &frontier {
            for v in graph.vertices() {
                if !dist.contains_key(v) && graph.is_edge(u, v) {
                    dist.insert(v.clone(), layer);
                    next.push(v.clone());
                }
            }
        }
        frontier = next;
    }
    dist
}

/// Checks the internal consistency of a graph: every stored neighbor is a
/// present vertex, no self-loops are stored, and adjacency is symmetric.
pub fn check_graph_consistency<V>(graph: &Graph<V>)
where
    V: Eq + Hash + Clone + Debug,
{
    init_tracing();
    let _span = info_span!("check_graph_consistency").entered();
    for v in graph.vertices() {
        for neighbor in graph.neighbors(v) {
            assert_ne!(v, neighbor, "self-loop stored at {v:?}");
            assert!(
                graph.contains(neighbor),
                "dangling neighbor {neighbor:?} of {v:?}"
            );
            assert!(
                graph.is_edge(neighbor, v),
                "asymmetric edge {v:?} -> {neighbor:?}"
            );
        }
    }
}
