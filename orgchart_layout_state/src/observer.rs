// Copyright 2026 the OrgChart Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observer hooks into a running [`crate::LayoutState`].

use crate::boundary::Boundary;
use crate::operation::Operation;

/// Fire-and-forget hooks a caller can install on a [`crate::LayoutState`].
///
/// , these are for observation only — inspecting progress,
/// driving a progress bar, logging — and must not mutate layout state from
/// within a callback. Both methods default to no-ops so callers only
/// override the hook they care about.
pub trait LayoutObserver {
    /// Called whenever the current level's boundary changes.
    fn boundary_changed(&mut self, _boundary: &Boundary) {}

    /// Called whenever the state moves to a new [`Operation`] phase.
    fn operation_changed(&mut self, _operation: Operation) {}
}
