//! Topological sort, graph reversal, and Kosaraju SCC decomposition.
//!
//! All three algorithms are built on the postorder DFS engine in
//! [`traverse`](super::traverse): topological order is reversed finish
//! order, and Kosaraju's algorithm is one finish-order pass, a reversal,
//! and a second pass over the reversed graph.

use tracing::debug;

use super::store::{Graph, GraphKind};

impl Graph {
    /// Topologically sorts the graph, returning every node exactly once.
    ///
    /// Sweeps nodes in insertion order, runs a DFS from each unseen one
    /// into a shared finish list, then reverses the list in place.
    /// \(O(n + m)\).
    ///
    /// For an acyclic graph the result respects all edges: if `u -> v`
    /// exists, `u` precedes `v`. If the graph is cyclic the result is still
    /// total (every node appears once) but does not represent a valid
    /// dependency order; which order you get depends on node insertion
    /// order. That is accepted behavior, not an error.
    ///
    /// All nodes must be `Unseen` on entry; call
    /// [`reset_states`](Self::reset_states) first if a previous traversal
    /// has touched the graph.
    pub fn topological_sort(&mut self) -> Vec<usize> {
        debug_assert!(
            self.visit.all_unseen(),
            "topological_sort requires fresh node states; call reset_states first"
        );
        let mut finish = Vec::with_capacity(self.node_count());
        for node in self.nodes() {
            if !self.visit.is_seen(node) {
                self.dfs_from(node, &mut finish);
            }
        }
        finish.reverse();
        debug!(
            nodes = self.node_count(),
            edges = self.edge_count(),
            "topological sort complete"
        );
        finish
    }

    /// Returns a reversed copy of the graph: every stored arc `u -> v`
    /// becomes `v -> u`. \(O(n + m)\).
    ///
    /// The copy is always [`GraphKind::Directed`], has one node per
    /// original node with index correspondence, fresh traversal state, and
    /// shares no mutable state with the original. Reversal is semantically
    /// meaningful only for directed input; on undirected input it flips the
    /// stored symmetric arcs, which yields an equivalent structure.
    pub fn reverse(&self) -> Graph {
        let mut reversed = Graph::new(GraphKind::Directed);
        for _ in self.nodes() {
            reversed.make_node();
        }
        for node in self.nodes() {
            for adjacent in self.adjacents(node) {
                reversed.adjacency[adjacent].push(node);
            }
        }
        reversed
    }

    /// Decomposes a directed graph into strongly connected components
    /// using Kosaraju's algorithm. \(O(n + m)\).
    ///
    /// Returns `None` for undirected graphs — SCC is defined only for
    /// directed ones. Otherwise every node appears in exactly one returned
    /// component, and two nodes share a component iff each is reachable
    /// from the other.
    ///
    /// Component entries are node indices of this graph (the reversed copy
    /// used internally preserves index correspondence); within-component
    /// order reflects the traversal of the reversed graph. Node states are
    /// reset between the two passes, so the graph is left with fresh
    /// traversal state on return.
    ///
    /// All nodes must be `Unseen` on entry, as for
    /// [`topological_sort`](Self::topological_sort).
    pub fn strongly_connected_components(&mut self) -> Option<Vec<Vec<usize>>> {
        if self.kind == GraphKind::Undirected {
            return None;
        }

        let finish_order = self.topological_sort();
        // Undo the first pass; without this, a later traversal of `self`
        // would treat every node as already visited.
        self.reset_states();
        let mut reversed = self.reverse();

        let mut components = Vec::new();
        for &sink in &finish_order {
            if !reversed.visit.is_seen(sink) {
                let mut component = Vec::new();
                reversed.dfs_from(sink, &mut component);
                components.push(component);
            }
        }
        debug!(
            nodes = self.node_count(),
            components = components.len(),
            "scc decomposition complete"
        );
        Some(components)
    }
}
