// Copyright 2026 the OrgChart Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`LayoutState`]: the mutable run state threaded through `apply()`.

use orgchart_box_tree::NodeId;
use orgchart_geometry::{Rect, Size};

use crate::boundary::Boundary;
use crate::error::LayoutStateError;
use crate::observer::LayoutObserver;
use crate::operation::Operation;

/// One frame of [`LayoutState`]'s level stack: the subtree currently being
/// laid out and the [`Boundary`] accumulating its placed content.
pub struct LayoutLevel {
    /// The node whose subtree this frame is laying out.
    pub branch_root: NodeId,
    /// The boundary accumulating everything placed under `branch_root` so
    /// far at this level.
    pub boundary: Boundary,
}

/// Mutable state threaded through one `apply()` run:
///
/// - a stack of [`LayoutLevel`] frames, one per subtree currently being
/// laid out, each carrying a [`Boundary`] pulled from a pool sized to the
/// tree's depth so pushing never allocates mid-run;
/// - the current [`Operation`] phase;
/// - an optional `data_id -> Size` lookup a layout strategy can use to
/// resolve intrinsic box sizes ;
/// - an optional [`LayoutObserver`] for fire-and-forget progress hooks.
pub struct LayoutState {
    levels: Vec<LayoutLevel>,
    pool: Vec<Boundary>,
    depth: u32,
    operation: Operation,
    size_lookup: Option<Box<dyn Fn(&str) -> Option<Size>>>,
    observer: Option<Box<dyn LayoutObserver>>,
}

impl LayoutState {
    /// A fresh state with a boundary pool sized to `depth` (the tree's
    /// depth, per [`orgchart_box_tree::Tree::depth`]).
    #[must_use]
    pub fn new(depth: u32) -> Self {
        let pool = (0..depth.max(1)).map(|_| Boundary::new()).collect();
        Self {
            levels: Vec::new(),
            pool,
            depth: depth.max(1),
            operation: Operation::default(),
            size_lookup: None,
            observer: None,
        }
    }

    /// Installs a `data_id -> Size` lookup for resolving intrinsic box
    /// sizes during layout.
    pub fn set_size_lookup<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<Size> + 'static,
    {
        self.size_lookup = Some(Box::new(lookup));
    }

    /// Resolves `data_id`'s intrinsic size through the installed lookup, if
    /// any.
    #[must_use]
    pub fn lookup_size(&self, data_id: &str) -> Option<Size> {
        self.size_lookup.as_ref().and_then(|f| f(data_id))
    }

    /// Installs an observer for `boundary_changed`/`operation_changed`
    /// hooks.
    pub fn set_observer(&mut self, observer: Box<dyn LayoutObserver>) {
        self.observer = Some(observer);
    }

    /// Removes and returns the installed observer, if any, handing
    /// ownership back to the caller once the run that installed it has
    /// finished (see `orgchart_layout::LayoutAlgorithm::apply`, which
    /// reclaims its observer this way so the same `LayoutAlgorithm` can
    /// drive another run).
    pub fn take_observer(&mut self) -> Option<Box<dyn LayoutObserver>> {
        self.observer.take()
    }

    /// The current phase.
    #[must_use]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Moves to a new phase, firing `operation_changed` on the installed
    /// observer (if any).
    pub fn set_operation(&mut self, operation: Operation) {
        self.operation = operation;
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.operation_changed(operation);
        }
    }

    /// How many levels are currently on the stack.
    #[must_use]
    pub fn depth_in_progress(&self) -> usize {
        self.levels.len()
    }

    /// Pops a [`Boundary`] from the pool and installs a fresh
    /// [`LayoutLevel`] for `branch_root`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutStateError::PoolExhausted`] if every pooled boundary
    /// is already in use — a correctly driven `apply()` run never pushes
    /// deeper than the tree's own depth, so this indicates a bug in the
    /// caller, not a recoverable data condition.
    pub fn push_layout_level(&mut self, branch_root: NodeId) -> Result<(), LayoutStateError> {
        let boundary = self
            .pool
            .pop()
            .ok_or(LayoutStateError::PoolExhausted { depth: self.depth })?;
        self.levels.push(LayoutLevel { branch_root, boundary });
        Ok(())
    }

    /// Pops the top [`LayoutLevel`], merges its boundary into the
    /// now-current top level (if any), and returns the popped boundary's
    /// pool slot for reuse.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutStateError::EmptyStack`] if the level stack is empty.
    pub fn pop_layout_level(&mut self) -> Result<Boundary, LayoutStateError> {
        let mut level = self.levels.pop().ok_or(LayoutStateError::EmptyStack)?;
        if let Some(parent) = self.levels.last_mut() {
            parent.boundary.merge_from(&level.boundary);
            if let Some(observer) = self.observer.as_deref_mut() {
                observer.boundary_changed(&parent.boundary);
            }
        }
        let returned = level.boundary.clone();
        level.boundary.clear();
        self.pool.push(level.boundary);
        Ok(returned)
    }

    /// The current (innermost) level, if any.
    #[must_use]
    pub fn top(&self) -> Option<&LayoutLevel> {
        self.levels.last()
    }

    /// Mutable access to the current (innermost) level, if any.
    pub fn top_mut(&mut self) -> Option<&mut LayoutLevel> {
        self.levels.last_mut()
    }

    /// Merges a strategy-injected spacer's rect into the current level's
    /// boundary, without it ever becoming a node of its own
    /// in the tree.
    pub fn merge_spacer(&mut self, rect: Rect) {
        if let Some(level) = self.levels.last_mut() {
            level.boundary.merge(rect);
            if let Some(observer) = self.observer.as_deref_mut() {
                observer.boundary_changed(&level.boundary);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orgchart_box_tree::{BoxContainer, SYSTEM_ROOT_ID, Tree};

    /// A two-node tree (system root + one child), just to get two distinct
    /// real `NodeId`s to push onto the level stack.
    fn two_node_tree() -> (Tree, NodeId, NodeId) {
        let mut container = BoxContainer::new();
        let child_id = container.allocate_id();
        container.insert(orgchart_box_tree::Box::new(child_id, SYSTEM_ROOT_ID, Size::ZERO));
        let tree = Tree::build(&mut container).unwrap();
        let root = tree.root().unwrap();
        let child = tree.children_of(root)[0];
        (tree, root, child)
    }

    #[test]
    fn push_past_pool_depth_errors() {
        let (_tree, root, _child) = two_node_tree();
        let mut state = LayoutState::new(1);
        state.push_layout_level(root).unwrap();
        let err = state.push_layout_level(root).unwrap_err();
        assert!(matches!(err, LayoutStateError::PoolExhausted { depth: 1 }));
    }

    #[test]
    fn pop_empty_stack_errors() {
        let mut state = LayoutState::new(2);
        assert!(matches!(
            state.pop_layout_level().unwrap_err(),
            LayoutStateError::EmptyStack
        ));
    }

    #[test]
    fn pop_merges_into_parent_level() {
        let (_tree, root, child) = two_node_tree();
        let mut state = LayoutState::new(2);
        state.push_layout_level(root).unwrap();
        state.push_layout_level(child).unwrap();
        state.merge_spacer(Rect::new(
            orgchart_geometry::Point::new(0.0, 0.0),
            Size::new(10.0, 10.0),
        ));
        state.pop_layout_level().unwrap();
        assert!(!state.top().unwrap().boundary.is_empty());
    }

    #[test]
    fn operation_defaults_to_preparing() {
        let state = LayoutState::new(3);
        assert_eq!(state.operation(), Operation::Preparing);
    }
}
