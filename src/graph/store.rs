//! The graph arena: nodes, adjacency lists, and the kind tag.
//!
//! Nodes are identified by `usize` indices into the owning graph's node
//! container. The index is the only cross-reference format; nodes are never
//! shared between graphs, so an index is meaningful only for the graph that
//! produced it. Insertion order is significant — it is the default start
//! order for the traversal algorithms.

use core::str::FromStr;

use crate::error::GraphError;

use super::visited::{VisitList, VisitState};

/// Whether edges are one-way arcs or symmetric connections.
///
/// Decided once at construction; algorithms branch on the enum, never on a
/// kind string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GraphKind {
    /// Each edge is a one-way arc `from -> to`.
    Directed,
    /// Each edge connects both endpoints symmetrically.
    Undirected,
}

impl FromStr for GraphKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "directed" => Ok(Self::Directed),
            "undirected" => Ok(Self::Undirected),
            other => Err(GraphError::InvalidKind(other.to_owned())),
        }
    }
}

/// An adjacency-list graph that owns its nodes and their traversal state.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `make_node` | \(O(1)\) amortized | Appends to internal vectors |
/// | `connect` | \(O(1)\) amortized | Appends to adjacency list(s) |
/// | `adjacents` | \(O(1)\) | Borrowing iterator |
/// | `topological_sort` | \(O(n + m)\) | DFS sweep + in-place reversal |
/// | `reverse` | \(O(n + m)\) | Full structural copy |
/// | `strongly_connected_components` | \(O(n + m)\) | Two DFS sweeps + reversal |
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGraph"))]
pub struct Graph {
    pub(crate) kind: GraphKind,
    pub(crate) adjacency: Vec<Vec<usize>>,
    /// Transient traversal state; skipped by serialization and rebuilt fresh.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) visit: VisitList,
}

impl Graph {
    /// Creates an empty graph of the given kind.
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            adjacency: Vec::new(),
            visit: VisitList::new(),
        }
    }

    /// Creates an empty graph from a kind string.
    ///
    /// # Errors
    /// [`GraphError::InvalidKind`] for anything other than `"directed"` or
    /// `"undirected"`.
    pub fn with_kind(kind: &str) -> Result<Self, GraphError> {
        Ok(Self::new(kind.parse()?))
    }

    /// Returns the graph's kind tag.
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Appends a new node and returns its index.
    ///
    /// The node starts `Unseen` with no parent and no adjacents; its index
    /// equals its position in the node container.
    pub fn make_node(&mut self) -> usize {
        let idx = self.adjacency.len();
        self.adjacency.push(Vec::new());
        self.visit.push();
        debug_assert_eq!(self.adjacency.len(), self.visit.len());
        idx
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// All node indices in insertion order.
    pub fn nodes(&self) -> core::ops::Range<usize> {
        0..self.node_count()
    }

    /// Number of stored arcs.
    ///
    /// An undirected edge is stored as two arcs (one per direction), except
    /// a self-loop which is stored once.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Appends `to` to `from`'s adjacency list, and symmetrically for
    /// undirected graphs.
    ///
    /// # Errors
    /// [`GraphError::InvalidNodeReference`] if either index does not refer
    /// to a node of this graph.
    pub fn connect(&mut self, from: usize, to: usize) -> Result<(), GraphError> {
        self.check_node(from)?;
        self.check_node(to)?;
        self.adjacency[from].push(to);
        if self.kind == GraphKind::Undirected && from != to {
            self.adjacency[to].push(from);
        }
        Ok(())
    }

    /// Returns the adjacents of `node` in edge-insertion order.
    ///
    /// # Panics
    /// Panics if `node` is out of bounds.
    pub fn adjacents(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        assert!(node < self.node_count(), "node {node} out of bounds");
        self.adjacency[node].iter().copied()
    }

    /// Edge membership test.
    ///
    /// # Panics
    /// Panics if `from` or `to` are out of bounds.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        assert!(to < self.node_count(), "node {to} out of bounds");
        self.adjacents(from).any(|v| v == to)
    }

    /// Visitation state of `node` within the current traversal.
    ///
    /// # Panics
    /// Panics if `node` is out of bounds.
    pub fn state(&self, node: usize) -> VisitState {
        assert!(node < self.node_count(), "node {node} out of bounds");
        self.visit.state(node)
    }

    /// The node that discovered `node` during the current traversal, if any.
    ///
    /// # Panics
    /// Panics if `node` is out of bounds.
    pub fn parent(&self, node: usize) -> Option<usize> {
        assert!(node < self.node_count(), "node {node} out of bounds");
        self.visit.parent(node)
    }

    /// Resets every node to `Unseen` with no parent.
    ///
    /// Required before re-running [`topological_sort`](Self::topological_sort)
    /// or [`strongly_connected_components`](Self::strongly_connected_components)
    /// on a graph a previous traversal has touched.
    pub fn reset_states(&mut self) {
        self.visit.clear();
    }

    pub(crate) fn check_node(&self, index: usize) -> Result<(), GraphError> {
        if index < self.node_count() {
            Ok(())
        } else {
            Err(GraphError::InvalidNodeReference {
                index,
                node_count: self.node_count(),
            })
        }
    }
}

impl core::fmt::Debug for Graph {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Graph")
            .field("kind", &self.kind)
            .field("nodes", &self.node_count())
            .field("adjacency", &self.adjacency)
            .finish()
    }
}

/// Deserialization shadow of [`Graph`]: structure only, no traversal state.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGraph {
    kind: GraphKind,
    adjacency: Vec<Vec<usize>>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGraph> for Graph {
    type Error = GraphError;

    fn try_from(raw: RawGraph) -> Result<Self, Self::Error> {
        let node_count = raw.adjacency.len();
        let mut visit = VisitList::new();
        for nbrs in &raw.adjacency {
            for &v in nbrs {
                if v >= node_count {
                    return Err(GraphError::InvalidNodeReference {
                        index: v,
                        node_count,
                    });
                }
            }
            visit.push();
        }
        Ok(Self {
            kind: raw.kind,
            adjacency: raw.adjacency,
            visit,
        })
    }
}
