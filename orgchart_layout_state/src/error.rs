// Copyright 2026 the OrgChart Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors local to a running [`crate::LayoutState`].

/// Faults raised by [`crate::LayoutState`]'s level stack.
///
/// Both variants are programmer errors : the pool is sized to
/// the tree's own depth, so a correctly-driven `apply()` run can never push
/// deeper than that, and can never pop an empty stack.
#[derive(Debug, thiserror::Error)]
pub enum LayoutStateError {
    /// `push_layout_level` was called more times than the boundary pool,
    /// sized to the tree's depth, has slots for.
    #[error("layout state pushed past its boundary pool depth ({depth})")]
    PoolExhausted {
        /// The pool's configured depth.
        depth: u32,
    },
    /// `pop_layout_level` was called with no level on the stack.
    #[error("popped a layout level with an empty level stack")]
    EmptyStack,
}
