//! The graph arena and its traversal algorithms.
//!
//! - `store`: nodes, adjacency lists, and the directed/undirected kind tag
//! - `visited`: per-node traversal state
//! - `traverse`: the shared postorder DFS engine
//! - `algorithms`: topological sort, reversal, SCC decomposition

mod algorithms;
mod store;
mod traverse;
mod visited;

pub use store::{Graph, GraphKind};
pub use visited::VisitState;
