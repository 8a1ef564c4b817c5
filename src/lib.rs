//! # `arbor` - Graph Arena with DFS Ordering Algorithms
//!
//! A small directed/undirected graph library built around one primitive —
//! postorder depth-first search — and the three classical algorithms that
//! fall out of it: topological sort, graph reversal, and strongly connected
//! component decomposition via Kosaraju's algorithm.
//!
//! ## Design
//!
//! - **Arena-of-nodes with index references**: nodes live in the owning
//!   [`Graph`] and are addressed by `usize` index. Parent back-pointers are
//!   weak `Option<usize>` indices, so no reference cycles with the forward
//!   adjacency edges.
//! - **Exclusive traversal state**: visitation flags and parents are plain
//!   per-node state mutated through `&mut Graph`; the borrow checker
//!   enforces the single-writer, single-call-stack contract, so no locking
//!   is provided or required.
//! - **Two-variant kind tag**: `"directed"`/`"undirected"` is parsed once
//!   into [`GraphKind`] at construction and never string-compared again.
//! - **Depth safety**: the internal algorithms run on an explicit-stack DFS
//!   engine, so deep graphs cannot exhaust the call stack; the recursive
//!   textbook formulation is also exposed as [`Graph::dfs`].
//!
//! ## Example
//!
//! ```rust
//! use arbor::{Graph, GraphKind};
//!
//! let mut graph = Graph::new(GraphKind::Directed);
//! let shirt = graph.make_node();
//! let tie = graph.make_node();
//! let jacket = graph.make_node();
//! graph.connect(shirt, tie)?;
//! graph.connect(tie, jacket)?;
//!
//! let order = graph.topological_sort();
//! assert_eq!(order, vec![shirt, tie, jacket]);
//! # Ok::<(), arbor::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;

pub use error::GraphError;
pub use graph::{Graph, GraphKind, VisitState};

// Compile-time layout assertions: the per-node tags stay byte-sized.
const _: () = {
    use core::mem;

    assert!(mem::size_of::<VisitState>() == 1);
    assert!(mem::size_of::<GraphKind>() == 1);
};
