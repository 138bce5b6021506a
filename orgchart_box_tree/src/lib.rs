// Copyright 2026 the OrgChart Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! OrgChart Box Tree: the box model and visual tree the layout kernel walks.
//!
//! - [`Box`]: identity, parent link, intrinsic size and flags.
//! - [`BoxContainer`]: the `id -> Box` map with a mandatory system root.
//! - [`Tree`]: the visual tree built from a [`BoxContainer`] — a
//! generation-tagged arena of nodes reached through [`ids::NodeId`]
//! handles, with the two traversal orders the layout passes need
//! ([`Tree::child_first`], [`Tree::parent_first`]) and the structural
//! bookkeeping ([`Tree::update_hierarchy_stats`],
//! [`Tree::propagate_affects_layout`]) that has to run before any
//! strategy touches the tree.
//! - [`NodeLayoutInfo`]: the per-node geometry/strategy scratch space a
//! layout strategy reads and writes.
//!
//! This crate knows nothing about layout strategies, boundaries, or the
//! `apply()` driver — see `orgchart_layout_strategy` and `orgchart_layout`
//! for those. It is deliberately the leaf of the workspace (after
//! `orgchart_geometry`), the same role `understory_box_tree` plays relative
//! to higher layers in its own workspace: a reusable structural building
//! block, not a layout engine.

mod box_model;
mod container;
mod error;
mod flags;
mod ids;
mod node;
mod tree;

pub use box_model::Box;
pub use container::{BoxContainer, SYSTEM_ROOT_ID};
pub use error::BoxTreeError;
pub use flags::BoxFlags;
pub use ids::{BoxId, NodeId};
pub use node::{NodeLayoutInfo, StrategyId};
pub use tree::Tree;
