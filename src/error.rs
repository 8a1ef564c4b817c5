//! Typed errors for graph construction and traversal.

/// Errors surfaced by graph construction and the traversal engine.
///
/// Structural misuse (a node index that does not belong to the graph, or a
/// DFS started on an already-visited node) fails loudly with one of these
/// variants instead of silently corrupting traversal state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A graph kind string other than `"directed"` or `"undirected"`.
    #[error("invalid graph kind {0:?}, expected \"directed\" or \"undirected\"")]
    InvalidKind(String),

    /// A node index that does not refer to a node owned by this graph.
    #[error("node index {index} out of bounds for graph with {node_count} nodes")]
    InvalidNodeReference {
        /// The offending index.
        index: usize,
        /// Number of nodes the graph owned at the time of the call.
        node_count: usize,
    },

    /// An operation was invoked in a state that violates its contract.
    #[error("precondition violated: {0}")]
    PreconditionViolated(&'static str),
}
