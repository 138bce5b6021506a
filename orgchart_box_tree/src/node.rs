// Copyright 2026 the OrgChart Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`NodeLayoutInfo`]: per-node mutable geometry & strategy scratch space.
//!
//! A node's identity and hierarchy live in [`crate::Tree`]'s arena as a
//! `(NodeId, Node)` pair rather than a standalone struct callers hold onto,
//! the same way `understory_box_tree::Tree` exposes node state only through
//! `NodeId`-keyed accessor methods. `NodeId` *is* the handle a caller passes
//! around; `Node` (this module's private arena slot) and [`NodeLayoutInfo`]
//! are reached through [`crate::Tree`]'s methods.

use orgchart_geometry::{Dimensions, Edge, Point, Rect};

use crate::ids::{BoxId, NodeId};

/// The id of a [`orgchart_layout_strategy`]-defined strategy, as resolved by
/// name from `DiagramLayoutSettings::layout_strategies`.
///
/// Kept as a plain string key here (rather than an enum or a strategy
/// reference) so `orgchart_box_tree` does not need to depend on
/// `orgchart_layout_strategy` — the dependency points the other way.
pub type StrategyId = String;

/// Per-node mutable geometry & strategy scratch space.
#[derive(Clone, Debug)]
pub struct NodeLayoutInfo {
    /// The placed rectangle's top-left corner.
    pub top_left: Point,
    /// The placed rectangle's size.
    pub size: orgchart_geometry::Size,
    /// Bounding rect of this subtree after layout.
    pub branch_exterior: Rect,
    /// The vertical band this node's row occupies among its siblings.
    pub siblings_row_v: Dimensions,
    /// Count of this node's regular siblings (as grouped by its parent's
    /// strategy).
    pub number_of_siblings: usize,
    /// Count of sibling rows, as seen by the parent's strategy.
    pub number_of_sibling_rows: usize,
    /// Count of sibling columns/groups, as seen by the parent's strategy.
    pub number_of_sibling_columns: usize,
    /// The strategy resolved for this node during preprocessing. `None`
    /// until preprocessing has run.
    pub effective_layout_strategy: Option<StrategyId>,
    /// Connector segments routed for this node's children, if any.
    pub connector: Option<Vec<Edge>>,
}

impl NodeLayoutInfo {
    /// The initial state for a node that has not yet been laid out: placed
    /// at `origin` with its intrinsic `size`, a branch exterior equal to its
    /// own rect.
    #[must_use]
    pub fn fresh(origin: Point, size: orgchart_geometry::Size) -> Self {
        Self {
            top_left: origin,
            size,
            branch_exterior: Rect::new(origin, size),
            siblings_row_v: Dimensions::min_max(),
            number_of_siblings: 0,
            number_of_sibling_rows: 0,
            number_of_sibling_columns: 0,
            effective_layout_strategy: None,
            connector: None,
        }
    }

    /// This node's current placed rect (`top_left` + `size`).
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.top_left, self.size)
    }
}

/// An arena slot: structural links plus the layout scratch space.
///
/// Private to the crate — external callers only ever see a [`NodeId`] and go
/// through [`crate::Tree`]'s accessor methods, matching
/// `understory_box_tree::tree::Node`'s visibility.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) generation: u32,
    pub(crate) box_id: BoxId,
    /// Depth from the system root (root = 0). Reassigned by
    /// [`crate::Tree::update_hierarchy_stats`].
    pub(crate) level: u32,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    /// The distinguished assistants sub-child, if this node has assistants.
    pub(crate) assistants_root: Option<NodeId>,
    /// Whether this node *is* an `assistants_root` (wraps a synthetic box,
    /// has no user box identity of its own).
    pub(crate) is_assistants_root: bool,
    /// Back-link from an `assistants_root` to the node it belongs to.
    /// `None` for every node except an `assistants_root`.
    pub(crate) assistants_owner: Option<NodeId>,
    pub(crate) layout: NodeLayoutInfo,
}

impl Node {
    pub(crate) fn new(generation: u32, box_id: BoxId, origin: Point, size: orgchart_geometry::Size) -> Self {
        Self {
            generation,
            box_id,
            level: 0,
            parent: None,
            children: Vec::new(),
            assistants_root: None,
            is_assistants_root: false,
            assistants_owner: None,
            layout: NodeLayoutInfo::fresh(origin, size),
        }
    }
}
