// Copyright 2026 the OrgChart Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The two-column "fishbone" pillar adapter shared by
//! [`crate::LayoutStrategy::MultiLineFishbone`] (one instance per group) and
//! [`crate::LayoutStrategy::FishboneAssistants`] (a single, implicit group).
//!
//! This is `SingleFishboneLayoutAdapter`'s role: an internal helper, not a
//! user-visible strategy variant, that synthesizes a transient view over a
//! left/right pillar pair so one recursive vertical pass can place both
//! pillars row-aligned.

use orgchart_box_tree::{BoxContainer, NodeId, Tree};
use orgchart_geometry::{Dimensions, Point, Size};

use crate::children::{align_horizontal_centers, shift_subtree};
use crate::tunables::Tunables;
use crate::{HorizontalRecurse, VerticalRecurse};

/// A group's children, already split into left/right pillars in
/// top-to-bottom placement order.
#[derive(Clone, Debug, Default)]
pub struct PillarLayout {
    /// The left column, row 0 first.
    pub left: Vec<NodeId>,
    /// The right column, row 0 first. May have one fewer entry than `left`
    /// when this group's last row is partial.
    pub right: Vec<NodeId>,
}

/// Places `pillars` row by row starting at `row_top`, centering the
/// shorter of each row's two children on the taller, and recursing into
/// each child's own vertical pass. Returns the bottom `y` reached.
pub fn vertical_place_pillars(
    tunables: &Tunables,
    tree: &mut Tree,
    container: &mut BoxContainer,
    state: &mut orgchart_layout_state::LayoutState,
    row_top: f64,
    pillars: &PillarLayout,
    recurse: &mut VerticalRecurse<'_>,
) -> f64 {
    let mut cursor = row_top;
    for i in 0..pillars.left.len() {
        let left = pillars.left[i];
        let right = pillars.right.get(i).copied();
        let left_h = tree.layout_info(left).size.height;
        let right_h = right.map_or(0.0, |n| tree.layout_info(n).size.height);
        let row_h = left_h.max(right_h);

        {
            let info = tree.layout_info_mut(left);
            info.top_left.y = cursor + (row_h - left_h) / 2.0;
            info.siblings_row_v = Dimensions::new(cursor, cursor + row_h);
        }
        recurse(tree, container, state, left);

        if let Some(r) = right {
            {
                let info = tree.layout_info_mut(r);
                info.top_left.y = cursor + (row_h - right_h) / 2.0;
                info.siblings_row_v = Dimensions::new(cursor, cursor + row_h);
            }
            recurse(tree, container, state, r);
        }

        cursor += row_h + tunables.sibling_spacing;
    }
    if pillars.left.is_empty() {
        row_top
    } else {
        cursor - tunables.sibling_spacing
    }
}

/// Recurses horizontally into every child of `pillars`, aligns each
/// column's horizontal centers, places `carrier` (if given) at the x
/// reached by the left column's rightmost branch extent, then aligns and
/// repositions the right column clear of the carrier.
///
/// Returns the carrier's `x` (or the left column's rightmost extent, if no
/// carrier was injected).
pub fn horizontal_place_pillars(
    tunables: &Tunables,
    tree: &mut Tree,
    container: &mut BoxContainer,
    state: &mut orgchart_layout_state::LayoutState,
    pillars: &PillarLayout,
    carrier: Option<NodeId>,
    recurse: &mut HorizontalRecurse<'_>,
) -> f64 {
    for &n in pillars.left.iter().chain(pillars.right.iter()) {
        recurse(tree, container, state, n);
    }

    align_horizontal_centers(tree, &pillars.left);

    let carrier_x = pillars
    .left
    .iter()
    .map(|&n| tree.layout_info(n).branch_exterior.right())
    .fold(None, |acc, c| Some(acc.map_or(c, |a: f64| a.max(c))))
    .unwrap_or(0.0);

    if let Some(carrier_node) = carrier {
        let row_v = pillars
        .left
        .iter()
        .chain(pillars.right.iter())
        .map(|&n| tree.layout_info(n).siblings_row_v)
        .fold(Dimensions::min_max(), |a, b| a + b);
        let rect = {
            let info = tree.layout_info_mut(carrier_node);
            info.top_left = Point::new(carrier_x, row_v.from);
            info.size = Size::new(tunables.child_connector_hook_length, row_v.length().max(0.0));
            info.branch_exterior = info.rect();
            info.rect()
        };
        state.merge_spacer(rect);
    }

    align_horizontal_centers(tree, &pillars.right);

    if let Some(min_left) = pillars
    .right
    .iter()
    .map(|&n| tree.layout_info(n).branch_exterior.left())
    .fold(None, |acc, c| Some(acc.map_or(c, |a: f64| a.min(c))))
    {
        let right_target_left = carrier_x + tunables.child_connector_hook_length;
        let dx = right_target_left - min_left;
        for &n in &pillars.right {
            shift_subtree(tree, n, dx);
        }
    }

    carrier_x
}
