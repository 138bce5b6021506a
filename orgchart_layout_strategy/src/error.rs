// Copyright 2026 the OrgChart Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors local to strategy configuration and invocation.

/// Faults a [`crate::LayoutStrategy`] can raise. All are
/// programmer/configuration errors : a strategy that survives
/// [`crate::LayoutStrategy::validate`] never raises one of these mid-run.
#[derive(Debug, thiserror::Error)]
pub enum StrategyError {
    /// `SingleColumn` rejects `Center` alignment.
    #[error("SingleColumn strategy rejects Center parent alignment")]
    SingleColumnRejectsCenter,
    /// Every fishbone variant requires `Center` alignment.
    #[error("fishbone strategies require Center parent alignment")]
    FishboneRequiresCenter,
    /// `MultiLineFishbone::max_groups` must be at least 1.
    #[error("max_groups must be >= 1, got {0}")]
    InvalidMaxGroups(usize),
    /// A strategy's operation was invoked on a node whose `affects_layout`
    /// is currently `false`.
    #[error("strategy invoked on a node that does not affect layout")]
    NodeDoesNotAffectLayout,
}
