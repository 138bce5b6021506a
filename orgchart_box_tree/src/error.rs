// Copyright 2026 the OrgChart Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors local to tree construction.

use crate::ids::BoxId;

/// Faults raised while building or querying a [`crate::Tree`].
///
/// These are all programmer/configuration errors: a malformed
/// [`crate::BoxContainer`] or a stale [`crate::ids::NodeId`], never a
/// recoverable runtime condition.
#[derive(Debug, thiserror::Error)]
pub enum BoxTreeError {
    /// `BoxContainer::system_root` was never set.
    #[error("box container has no system root")]
    NoSystemRoot,
    /// The system root id does not resolve to a box in the container.
    #[error("system root {0} not found in container")]
    SystemRootMissing(BoxId),
    /// After attaching every box, more than one root remained. Carries the offending root ids for diagnostics.
    #[error("expected exactly one root (the system root), found extra roots {0:?}")]
    MultipleRoots(Vec<BoxId>),
    /// A [`crate::ids::NodeId`] was used after the arena slot it pointed to
    /// was rebuilt (stale generation).
    #[error("stale node id")]
    StaleNodeId,
}
