//! Per-node traversal state.
//!
//! Visitation flags and parent back-pointers live in one dense list indexed
//! by node position, so the traversal engine expresses its visited logic in
//! one place while the graph store keeps adjacency concerns separate.
//!
//! State is plain (non-atomic): traversals mutate it through `&mut Graph`,
//! so exclusive ownership for the duration of an algorithm call is enforced
//! by the borrow checker. One traversal per graph at a time.

/// Visitation state of a node within the current traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitState {
    /// Not yet discovered by the current traversal.
    #[default]
    Unseen,
    /// Discovered (and possibly fully processed) by the current traversal.
    Seen,
}

/// Dense per-node traversal state: one [`VisitState`] and one weak parent
/// back-pointer per node.
///
/// Parents are stored as `Option<usize>` indices rather than references;
/// an owning pointer here would cycle with the forward adjacency edges.
#[derive(Debug, Clone, Default)]
pub(crate) struct VisitList {
    states: Vec<VisitState>,
    parents: Vec<Option<usize>>,
}

impl VisitList {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends a fresh slot: `Unseen`, no parent.
    pub(crate) fn push(&mut self) {
        self.states.push(VisitState::Unseen);
        self.parents.push(None);
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.states.len()
    }

    /// Resets every slot to `Unseen` with no parent.
    pub(crate) fn clear(&mut self) {
        for s in &mut self.states {
            *s = VisitState::Unseen;
        }
        for p in &mut self.parents {
            *p = None;
        }
    }

    #[inline(always)]
    pub(crate) fn state(&self, idx: usize) -> VisitState {
        self.states[idx]
    }

    #[inline(always)]
    pub(crate) fn is_seen(&self, idx: usize) -> bool {
        self.states[idx] == VisitState::Seen
    }

    #[inline(always)]
    pub(crate) fn mark(&mut self, idx: usize) {
        self.states[idx] = VisitState::Seen;
    }

    #[inline(always)]
    pub(crate) fn set_parent(&mut self, idx: usize, parent: usize) {
        self.parents[idx] = Some(parent);
    }

    #[inline(always)]
    pub(crate) fn parent(&self, idx: usize) -> Option<usize> {
        self.parents[idx]
    }

    /// `true` iff no slot has been touched since the last [`clear`](Self::clear).
    pub(crate) fn all_unseen(&self) -> bool {
        self.states.iter().all(|&s| s == VisitState::Unseen)
    }
}
