//! A generic, in-memory undirected graph keyed by vertex value.
//!
//! [`Graph`] stores an adjacency map from each vertex value to the set of its
//! neighbors, and keeps edges symmetric through every mutation.  Traversal is
//! provided both as lazy iterators ([`BfsIter`], [`DfsIter`]) and as
//! visitor-driven drivers ([`Graph::bfs`], [`Graph::dfs`]).

pub mod error;
pub mod graph;
pub mod search;
pub mod test_support;
pub mod tracing_support;


pub use error::GraphError;
pub use graph::Graph;
pub use search::{BfsIter, DfsIter};
