//! The depth-first traversal engine shared by all graph algorithms.
//!
//! DFS here is postorder with an explicit finish list: a node is appended
//! only after its entire reachable unvisited subtree has been explored.
//! The finish order is exactly what Kosaraju's algorithm consumes and, once
//! reversed, a topological order on acyclic input.
//!
//! Two drop-in engines are provided: a recursive one matching the textbook
//! formulation, and an explicit-stack one the internal algorithms use so
//! that pathologically deep graphs cannot exhaust the call stack. Both
//! produce identical finish lists and parent assignments.

use crate::error::GraphError;

use super::store::Graph;

impl Graph {
    /// Recursive postorder DFS from `start`.
    ///
    /// Marks `start` as seen, then for each adjacent node in adjacency
    /// order: if unseen, records `start` as its parent and recurses. After
    /// all adjacents are processed the node is appended to `finish`.
    /// \(O(n + m)\) over the reachable subgraph.
    ///
    /// Recursion depth equals the longest simple path from `start`; prefer
    /// [`dfs_iterative`](Self::dfs_iterative) when depth safety matters.
    ///
    /// # Errors
    /// - [`GraphError::InvalidNodeReference`] if `start` is out of bounds.
    /// - [`GraphError::PreconditionViolated`] if `start` is already seen.
    pub fn dfs(&mut self, start: usize, finish: &mut Vec<usize>) -> Result<(), GraphError> {
        self.check_start(start)?;
        self.dfs_recursive_from(start, finish);
        Ok(())
    }

    /// Explicit-stack DFS, a drop-in replacement for [`dfs`](Self::dfs).
    ///
    /// # Errors
    /// Same contract as [`dfs`](Self::dfs).
    pub fn dfs_iterative(&mut self, start: usize, finish: &mut Vec<usize>) -> Result<(), GraphError> {
        self.check_start(start)?;
        self.dfs_from(start, finish);
        Ok(())
    }

    fn check_start(&self, start: usize) -> Result<(), GraphError> {
        self.check_node(start)?;
        if self.visit.is_seen(start) {
            return Err(GraphError::PreconditionViolated(
                "dfs requires an unseen start node",
            ));
        }
        Ok(())
    }

    fn dfs_recursive_from(&mut self, node: usize, finish: &mut Vec<usize>) {
        self.visit.mark(node);
        // Index loop: adjacency and visit state are disjoint fields, but the
        // recursive call needs the whole `&mut self`.
        for i in 0..self.adjacency[node].len() {
            let next = self.adjacency[node][i];
            if !self.visit.is_seen(next) {
                self.visit.set_parent(next, node);
                self.dfs_recursive_from(next, finish);
            }
        }
        finish.push(node);
    }

    /// Iterative engine used by the algorithms; no precondition checks.
    ///
    /// Each stack entry is `(node, cursor)` where `cursor` is the position
    /// of the next adjacency entry to examine. A node is finished when its
    /// cursor runs off the end of its adjacency list.
    pub(crate) fn dfs_from(&mut self, start: usize, finish: &mut Vec<usize>) {
        self.visit.mark(start);
        let mut stack: Vec<(usize, usize)> = vec![(start, 0)];

        while let Some((node, cursor)) = stack.pop() {
            if let Some(&next) = self.adjacency[node].get(cursor) {
                // Push back the node with an advanced cursor, then descend.
                stack.push((node, cursor + 1));
                if !self.visit.is_seen(next) {
                    self.visit.mark(next);
                    self.visit.set_parent(next, node);
                    stack.push((next, 0));
                }
            } else {
                // All adjacents examined: record finish order.
                finish.push(node);
            }
        }
    }

    /// Reconstructs the discovery path from a traversal root to `node` by
    /// walking parent pointers. Returns `[node]` if `node` has no parent.
    ///
    /// Only meaningful after a traversal and before the next
    /// [`reset_states`](Self::reset_states).
    ///
    /// # Panics
    /// Panics if `node` is out of bounds, or if the parent chain is longer
    /// than the node count (which would indicate corrupted state).
    pub fn discovery_path(&self, node: usize) -> Vec<usize> {
        assert!(node < self.node_count(), "node {node} out of bounds");
        let mut path = vec![node];
        let mut cur = node;
        while let Some(p) = self.visit.parent(cur) {
            path.push(p);
            cur = p;
            assert!(
                path.len() <= self.node_count(),
                "parent chain exceeds node count"
            );
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphKind, VisitState};

    fn chain(n: usize) -> Graph {
        let mut g = Graph::new(GraphKind::Directed);
        for _ in 0..n {
            g.make_node();
        }
        for i in 0..n - 1 {
            g.connect(i, i + 1).unwrap();
        }
        g
    }

    #[test]
    fn dfs_finishes_in_postorder() {
        let mut g = chain(4);
        let mut finish = Vec::new();
        g.dfs(0, &mut finish).unwrap();
        assert_eq!(finish, vec![3, 2, 1, 0]);
        for node in 0..4 {
            assert_eq!(g.state(node), VisitState::Seen);
        }
    }

    #[test]
    fn dfs_records_parents() {
        // Diamond: 0 -> 1, 0 -> 2, 1 -> 3, 2 -> 3.
        let mut g = Graph::new(GraphKind::Directed);
        for _ in 0..4 {
            g.make_node();
        }
        g.connect(0, 1).unwrap();
        g.connect(0, 2).unwrap();
        g.connect(1, 3).unwrap();
        g.connect(2, 3).unwrap();

        let mut finish = Vec::new();
        g.dfs(0, &mut finish).unwrap();
        assert_eq!(g.parent(0), None);
        assert_eq!(g.parent(1), Some(0));
        assert_eq!(g.parent(2), Some(0));
        // 3 is discovered through 1, the first branch explored.
        assert_eq!(g.parent(3), Some(1));
        assert_eq!(g.discovery_path(3), vec![0, 1, 3]);
    }

    #[test]
    fn dfs_rejects_seen_start() {
        let mut g = chain(2);
        let mut finish = Vec::new();
        g.dfs(0, &mut finish).unwrap();
        assert_eq!(
            g.dfs(0, &mut finish).unwrap_err(),
            GraphError::PreconditionViolated("dfs requires an unseen start node")
        );
    }

    #[test]
    fn dfs_rejects_out_of_bounds_start() {
        let mut g = chain(2);
        let mut finish = Vec::new();
        assert_eq!(
            g.dfs(5, &mut finish).unwrap_err(),
            GraphError::InvalidNodeReference {
                index: 5,
                node_count: 2
            }
        );
    }

    #[test]
    fn iterative_matches_recursive() {
        // Cyclic graph with branching: exercises re-visits and backtracking.
        let mut a = Graph::new(GraphKind::Directed);
        for _ in 0..6 {
            a.make_node();
        }
        for &(u, v) in &[(0, 1), (0, 2), (1, 3), (2, 3), (3, 0), (3, 4), (4, 5), (5, 3)] {
            a.connect(u, v).unwrap();
        }
        let mut b = Graph::new(GraphKind::Directed);
        for _ in 0..6 {
            b.make_node();
        }
        for &(u, v) in &[(0, 1), (0, 2), (1, 3), (2, 3), (3, 0), (3, 4), (4, 5), (5, 3)] {
            b.connect(u, v).unwrap();
        }

        let mut finish_rec = Vec::new();
        let mut finish_iter = Vec::new();
        a.dfs(0, &mut finish_rec).unwrap();
        b.dfs_iterative(0, &mut finish_iter).unwrap();

        assert_eq!(finish_rec, finish_iter);
        for node in 0..6 {
            assert_eq!(a.parent(node), b.parent(node));
        }
    }

    #[test]
    fn iterative_survives_deep_chains() {
        let n = 100_000;
        let mut g = chain(n);
        let mut finish = Vec::new();
        g.dfs_iterative(0, &mut finish).unwrap();
        assert_eq!(finish.len(), n);
        assert_eq!(finish[0], n - 1);
        assert_eq!(finish[n - 1], 0);
    }

    #[test]
    fn traversal_respects_adjacency_order() {
        // 0 -> 2 listed before 0 -> 1: the engine must honor insertion order.
        let mut g = Graph::new(GraphKind::Directed);
        for _ in 0..3 {
            g.make_node();
        }
        g.connect(0, 2).unwrap();
        g.connect(0, 1).unwrap();
        let mut finish = Vec::new();
        g.dfs(0, &mut finish).unwrap();
        assert_eq!(finish, vec![2, 1, 0]);
    }
}
