use thiserror::Error;

/// Errors returned by the traversal entry points.
///
/// Mutation and query operations never fail; requests naming absent vertices
/// or edges are silent no-ops.  Only starting a traversal from a vertex that
/// is not in the graph is signaled.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// The requested start vertex is not present in the graph.
    #[error("vertex not found in graph")]
    VertexNotFound,
}
