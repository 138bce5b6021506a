// Copyright 2026 the OrgChart Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`LayoutResult`]: the placed geometry read out of a completed `apply()`
//! run.

use std::collections::HashMap;

use orgchart_box_tree::{BoxId, NodeId, Tree};
use orgchart_box_tree::BoxContainer;
use orgchart_geometry::{Edge, Point, Rect, Size};

use crate::algorithm::compute_branch_visual_bounding_rect;

/// The placed geometry produced by one [`crate::LayoutAlgorithm::apply`]
/// run.
///
/// Carries the working [`Tree`]/[`BoxContainer`] pair `apply()` built
/// (including every strategy-injected spacer) plus a `BoxId -> NodeId`
/// index, so a caller can read out a user box's placed rect or connector
/// by the same id it ingested, without needing to know about [`NodeId`]
/// at all.
#[derive(Debug)]
pub struct LayoutResult {
    tree: Tree,
    container: BoxContainer,
    index: HashMap<BoxId, NodeId>,
}

impl LayoutResult {
    pub(crate) fn new(tree: Tree, container: BoxContainer, index: HashMap<BoxId, NodeId>) -> Self {
        Self { tree, container, index }
    }

    /// The completed visual tree, for callers that need raw [`NodeId`]
    /// access (e.g. to walk assistants sub-hierarchies explicitly).
    #[must_use]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// The working box container, including every strategy-injected spacer
    /// box (`is_special() == true`) that has no counterpart in the
    /// original, caller-owned container passed to `apply()`.
    #[must_use]
    pub fn container(&self) -> &BoxContainer {
        &self.container
    }

    fn node_of(&self, box_id: BoxId) -> Option<NodeId> {
        self.index.get(&box_id).copied()
    }

    /// `box_id`'s placed top-left corner, or `None` if `box_id` was not
    /// part of this run (including spacers, which have no stable id in the
    /// caller's own container).
    #[must_use]
    pub fn top_left(&self, box_id: BoxId) -> Option<Point> {
        Some(self.tree.layout_info(self.node_of(box_id)?).top_left)
    }

    /// `box_id`'s placed size, or `None` if `box_id` was not part of this
    /// run.
    #[must_use]
    pub fn size(&self, box_id: BoxId) -> Option<Size> {
        Some(self.tree.layout_info(self.node_of(box_id)?).size)
    }

    /// `box_id`'s placed rect (`top_left` + `size`), or `None` if `box_id`
    /// was not part of this run.
    #[must_use]
    pub fn rect(&self, box_id: BoxId) -> Option<Rect> {
        Some(self.tree.layout_info(self.node_of(box_id)?).rect())
    }

    /// `box_id`'s bounding rect of its whole subtree (`branch_exterior`),
    /// or `None` if `box_id` was not part of this run.
    #[must_use]
    pub fn branch_exterior(&self, box_id: BoxId) -> Option<Rect> {
        Some(self.tree.layout_info(self.node_of(box_id)?).branch_exterior)
    }

    /// `box_id`'s routed connector segments, or `None` if `box_id` has no
    /// children (or is collapsed, or was not part of this run).
    #[must_use]
    pub fn connector(&self, box_id: BoxId) -> Option<&[Edge]> {
        self.tree.layout_info(self.node_of(box_id)?).connector.as_deref()
    }

    /// The smallest rect enclosing every non-special, layout-affecting box
    /// in the whole diagram.
    #[must_use]
    pub fn bounding_rect(&self) -> Rect {
        let Some(root) = self.tree.root() else {
            return Rect::new(Point::ZERO, Size::ZERO);
        };
        compute_branch_visual_bounding_rect(&self.tree, &self.container, root)
    }
}
