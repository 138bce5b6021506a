// Copyright 2026 the OrgChart Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`Operation`]: the current phase of an `apply()` run.

/// The phase a [`crate::LayoutState`] is currently in.
///
/// Mirrors the phase names uses for the `apply()` step
/// sequence; strategies and observers use this to tell, for example, a
/// `boundary_changed` firing during `Horizontal` from one firing during
/// `Connectors`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Building the tree and running the structural passes (hierarchy
    /// stats, `affects_layout` propagation) before any strategy runs.
    Preparing,
    /// Each strategy's `pre_process` pass.
    Preprocess,
    /// Vertical placement (levels stacked top-down).
    Vertical,
    /// Horizontal placement (siblings spread left-to-right, collision-avoiding).
    Horizontal,
    /// Connector routing, once every box has its final rect.
    Connectors,
    /// The run has finished; `apply()` is about to return.
    Completed,
}

impl Default for Operation {
    fn default() -> Self {
        Self::Preparing
    }
}
