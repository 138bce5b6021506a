// Copyright 2026 the OrgChart Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! OrgChart Layout State: the mutable run state an `apply()` pass threads
//! through tree traversal.
//!
//! - [`Boundary`]: a subtree's left/right envelope as a function of `y`,
//! and the `O(N)`-per-level collision-avoidance primitive built on it.
//! - [`LayoutState`]: the pooled stack of [`LayoutLevel`] frames, the
//! current [`Operation`] phase, and the optional size-lookup/observer
//! hooks a strategy reads and writes while walking the tree.
//!
//! This crate has no notion of a strategy or of `apply()`'s own step
//! sequence — see `orgchart_layout_strategy` and `orgchart_layout` for
//! those. It depends on `orgchart_box_tree` only for `NodeId`/`Tree`
//! traversal, the same narrow, one-directional dependency
//! `understory_box_tree`'s sibling crates take on it.

mod boundary;
mod error;
mod observer;
mod operation;
mod state;

pub use boundary::Boundary;
pub use error::LayoutStateError;
pub use observer::LayoutObserver;
pub use operation::Operation;
pub use state::{LayoutLevel, LayoutState};
