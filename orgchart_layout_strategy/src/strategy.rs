// Copyright 2026 the OrgChart Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`LayoutStrategy`]: the four concrete per-node layout algorithms
//!, modeled as a tagged variant rather than a trait object
//! design note ("replace inheritance with a tagged
//! variant... method dispatch becomes a match on the tag").

use orgchart_box_tree::{Box as OrgBox, BoxContainer, NodeId, Tree};
use orgchart_geometry::{edge, Dimensions, Point, Size};
use orgchart_layout_state::{Boundary, LayoutState};

use crate::adapter::{horizontal_place_pillars, vertical_place_pillars, PillarLayout};
use crate::children::{align_horizontal_centers, partition_children, shift_subtree};
use crate::error::StrategyError;
use crate::group::group_pillars;
use crate::tunables::{ParentAlignment, Tunables};
use crate::{HorizontalRecurse, VerticalRecurse};

/// A pluggable per-node layout algorithm.
///
/// Every variant carries its own [`Tunables`]; `MultiLineFishbone` also
/// carries `max_groups`. `Linear`'s `columns` is the number of side-by-side
/// stacks it lays its children into.
#[derive(Clone, Debug)]
pub enum LayoutStrategy {
    /// Children stacked in a single vertical column.
    SingleColumn {
        /// Shared tunables. Must not use `ParentAlignment::Center`.
        tunables: Tunables,
    },
    /// Children spread across several side-by-side columns, with no
    /// connector carrier spacers — the simple base case
    /// `MultiLineFishbone` falls back to for small child counts.
    Linear {
        /// Shared tunables.
        tunables: Tunables,
        /// Number of side-by-side columns.
        columns: usize,
    },
    /// Large child sets arranged into `max_groups` two-column fishbones
    /// hanging off a shared horizontal carrier.
    MultiLineFishbone {
        /// Shared tunables. Must use `ParentAlignment::Center`.
        tunables: Tunables,
        /// Number of vertical groups; must be at least 1.
        max_groups: usize,
    },
    /// Applied to `assistants_root` nodes: a single two-column fishbone
    ///.
    FishboneAssistants {
        /// Shared tunables. Must use `ParentAlignment::Center`.
        tunables: Tunables,
    },
}

impl LayoutStrategy {
    /// This strategy's shared tunables.
    #[must_use]
    pub fn tunables(&self) -> &Tunables {
        match self {
            Self::SingleColumn { tunables }
            | Self::Linear { tunables,.. }
            | Self::MultiLineFishbone { tunables,.. }
            | Self::FishboneAssistants { tunables } => tunables,
        }
    }

    /// Checks the configuration-level invariants lists:
    /// `SingleColumn` rejects `Center`, every fishbone requires `Center`,
    /// `max_groups` must be at least 1.
    ///
    /// # Errors
    ///
    /// See [`StrategyError`]'s variants.
    pub fn validate(&self) -> Result<(), StrategyError> {
        match self {
            Self::SingleColumn { tunables } => {
                if tunables.parent_alignment == ParentAlignment::Center {
                    return Err(StrategyError::SingleColumnRejectsCenter);
                }
            }
            Self::Linear {.. } => {}
            Self::MultiLineFishbone { tunables, max_groups } => {
                if tunables.parent_alignment != ParentAlignment::Center {
                    return Err(StrategyError::FishboneRequiresCenter);
                }
                if *max_groups == 0 {
                    return Err(StrategyError::InvalidMaxGroups(*max_groups));
                }
            }
            Self::FishboneAssistants { tunables } => {
                if tunables.parent_alignment != ParentAlignment::Center {
                    return Err(StrategyError::FishboneRequiresCenter);
                }
            }
        }
        Ok(())
    }

    /// Whether `MultiLineFishbone` should fall back to `Linear` for
    /// `child_count` children.
    #[must_use]
    fn fishbone_falls_back_to_linear(max_groups: usize, child_count: usize) -> bool {
        child_count <= max_groups * 2
    }

    /// Populates sibling-grouping stats on `node`'s regular children and
    /// injects any synthetic spacer boxes this strategy needs for
    /// connector routing. Skips collapsed nodes
    /// entirely: no descent, no spacers.
    pub fn pre_process(&self, tree: &mut Tree, container: &mut BoxContainer, node: NodeId) -> Result<(), StrategyError> {
        self.validate()?;
        if tree.is_collapsed(node, container) {
            return Ok(());
        }
        match self {
            Self::SingleColumn {.. } => pre_process_single_column(tree, container, node),
            Self::Linear { columns,.. } => pre_process_linear(tree, container, node, *columns),
            Self::MultiLineFishbone { max_groups,.. } => {
                let (regulars, _) = partition_children(tree, container, node);
                if Self::fishbone_falls_back_to_linear(*max_groups, regulars.len()) {
                    pre_process_linear(tree, container, node, 2);
                } else {
                    pre_process_multi_line_fishbone(tree, container, node, *max_groups);
                }
            }
            Self::FishboneAssistants {.. } => pre_process_fishbone_assistants(tree, container, node),
        }
        Ok(())
    }

    /// Places `node`'s regular children vertically,
    /// calling `recurse` for each one so its own strategy runs in turn.
    pub fn apply_vertical_layout(
        &self,
        tree: &mut Tree,
        container: &mut BoxContainer,
        state: &mut LayoutState,
        node: NodeId,
        recurse: &mut VerticalRecurse<'_>,
    ) {
        match self {
            Self::SingleColumn { tunables } => vertical_single_column(tunables, tree, container, state, node, recurse),
            Self::Linear { tunables,.. } => vertical_linear(tunables, tree, container, state, node, recurse),
            Self::MultiLineFishbone { tunables, max_groups } => {
                let (regulars, _) = partition_children(tree, container, node);
                if Self::fishbone_falls_back_to_linear(*max_groups, regulars.len()) {
                    vertical_linear(tunables, tree, container, state, node, recurse);
                } else {
                    vertical_multi_line_fishbone(tunables, tree, container, state, node, *max_groups, recurse);
                }
            }
            Self::FishboneAssistants { tunables } => vertical_fishbone_assistants(tunables, tree, container, state, node, recurse),
        }
    }

    /// Places `node`'s regular children horizontally,
    /// calling `recurse` for each one so its own strategy runs in turn.
    pub fn apply_horizontal_layout(
        &self,
        tree: &mut Tree,
        container: &mut BoxContainer,
        state: &mut LayoutState,
        node: NodeId,
        recurse: &mut HorizontalRecurse<'_>,
    ) {
        match self {
            Self::SingleColumn { tunables } => horizontal_single_column(tunables, tree, container, state, node, recurse),
            Self::Linear { tunables,.. } => horizontal_linear(tunables, tree, container, state, node, recurse),
            Self::MultiLineFishbone { tunables, max_groups } => {
                let (regulars, _) = partition_children(tree, container, node);
                if Self::fishbone_falls_back_to_linear(*max_groups, regulars.len()) {
                    horizontal_linear(tunables, tree, container, state, node, recurse);
                } else {
                    horizontal_multi_line_fishbone(tunables, tree, container, state, node, *max_groups, recurse);
                }
            }
            Self::FishboneAssistants { tunables } => horizontal_fishbone_assistants(tunables, tree, container, state, node, recurse),
        }
    }

    /// Routes `node`'s parent-to-children connector segments, storing them on `node`'s own
    /// [`orgchart_box_tree::NodeLayoutInfo::connector`].
    pub fn route_connectors(&self, tree: &mut Tree, container: &BoxContainer, node: NodeId) {
        match self {
            Self::SingleColumn { tunables } => connectors_single_column(tunables, tree, container, node),
            Self::Linear { tunables,.. } => connectors_linear(tunables, tree, container, node),
            Self::MultiLineFishbone { tunables, max_groups } => {
                let (regulars, _) = partition_children(tree, container, node);
                if Self::fishbone_falls_back_to_linear(*max_groups, regulars.len()) {
                    connectors_linear(tunables, tree, container, node);
                } else {
                    connectors_multi_line_fishbone(tunables, tree, container, node, *max_groups);
                }
            }
            Self::FishboneAssistants { tunables } => connectors_fishbone_assistants(tunables, tree, container, node),
        }
    }
}

fn new_spacer(tree: &mut Tree, container: &mut BoxContainer, parent: NodeId) -> NodeId {
    let parent_box_id = tree.box_id_of(parent);
    let spacer_id = container.allocate_id();
    let spacer = OrgBox::new_special(spacer_id, parent_box_id, Size::ZERO);
    tree.add_child(container, parent, spacer)
}

fn set_sibling_stats(tree: &mut Tree, regulars: &[NodeId], rows: usize, columns: usize) {
    let n = regulars.len();
    for &c in regulars {
        let info = tree.layout_info_mut(c);
        info.number_of_siblings = n;
        info.number_of_sibling_rows = rows;
        info.number_of_sibling_columns = columns;
    }
}

/// Unions `node`'s own rect with every one of `regulars`' current
/// `branch_exterior`, and stores the result as `node`'s own
/// `branch_exterior`. Does not consider `node`'s `assistants_root` — the
/// driver folds that in separately once this strategy call returns.
fn fold_branch_exterior(tree: &mut Tree, node: NodeId, regulars: &[NodeId]) {
    let mut exterior = tree.layout_info(node).rect();
    for &c in regulars {
        exterior = exterior + tree.layout_info(c).branch_exterior;
    }
    tree.layout_info_mut(node).branch_exterior = exterior;
}

// ---------------------------------------------------------------------
// SingleColumn
// ---------------------------------------------------------------------

fn pre_process_single_column(tree: &mut Tree, container: &mut BoxContainer, node: NodeId) {
    let (regulars, _) = partition_children(tree, container, node);
    set_sibling_stats(tree, &regulars, regulars.len(), 1);
    if !regulars.is_empty() {
        new_spacer(tree, container, node);
    }
}

fn vertical_single_column(
    t: &Tunables,
    tree: &mut Tree,
    container: &mut BoxContainer,
    state: &mut LayoutState,
    node: NodeId,
    recurse: &mut VerticalRecurse<'_>,
) {
    let (regulars, _) = partition_children(tree, container, node);
    let mut cursor = tree.layout_info(node).rect().bottom() + t.parent_child_spacing;
    for &child in &regulars {
        let height = tree.layout_info(child).size.height;
        {
            let info = tree.layout_info_mut(child);
            info.top_left.y = cursor;
            info.siblings_row_v = Dimensions::new(cursor, cursor + height);
        }
        recurse(tree, container, state, child);
        cursor = tree.layout_info(child).branch_exterior.bottom() + t.parent_child_spacing;
    }
    fold_branch_exterior(tree, node, &regulars);
}

fn horizontal_single_column(
    t: &Tunables,
    tree: &mut Tree,
    container: &mut BoxContainer,
    state: &mut LayoutState,
    node: NodeId,
    recurse: &mut HorizontalRecurse<'_>,
) {
    let (regulars, spacers) = partition_children(tree, container, node);
    for &child in &regulars {
        recurse(tree, container, state, child);
    }
    align_horizontal_centers(tree, &regulars);

    let parent_center = tree.layout_info(node).rect().center_h();
    let shield = t.parent_connector_shield;
    if !regulars.is_empty() {
        let current_left = regulars
        .iter()
        .map(|&n| tree.layout_info(n).branch_exterior.left())
        .fold(f64::INFINITY, f64::min);
        let current_right = regulars
        .iter()
        .map(|&n| tree.layout_info(n).branch_exterior.right())
        .fold(f64::NEG_INFINITY, f64::max);
        let dx = match t.parent_alignment {
            ParentAlignment::Left => parent_center + shield / 2.0 - current_left,
            ParentAlignment::Right => parent_center - shield / 2.0 - current_right,
            ParentAlignment::Center => 0.0,
        };
        for &child in &regulars {
            shift_subtree(tree, child, dx);
        }
    }

    if let (Some(&spacer), Some(&last)) = (spacers.first(), regulars.last()) {
        let top = tree.layout_info(node).rect().bottom();
        let bottom = tree.layout_info(last).branch_exterior.bottom();
        let rect = {
            let info = tree.layout_info_mut(spacer);
            info.top_left = Point::new(parent_center - shield / 2.0, top);
            info.size = Size::new(shield, (bottom - top).max(0.0));
            info.branch_exterior = info.rect();
            info.rect()
        };
        state.merge_spacer(rect);
    }

    fold_branch_exterior(tree, node, &regulars);
}

fn connectors_single_column(t: &Tunables, tree: &mut Tree, container: &BoxContainer, node: NodeId) {
    let (regulars, _) = partition_children(tree, container, node);
    if regulars.is_empty() {
        tree.layout_info_mut(node).connector = None;
        return;
    }
    let parent_rect = tree.layout_info(node).rect();
    let carrier_x = parent_rect.center_h();
    let last_center_v = tree.layout_info(*regulars.last().unwrap()).rect().center_v();

    let mut edges = vec![edge(Point::new(carrier_x, parent_rect.bottom()), Point::new(carrier_x, last_center_v))];
    for &child in &regulars {
        let rect = tree.layout_info(child).rect();
        let inner_x = match t.parent_alignment {
            ParentAlignment::Left | ParentAlignment::Center => rect.left(),
            ParentAlignment::Right => rect.right(),
        };
        edges.push(edge(Point::new(carrier_x, rect.center_v()), Point::new(inner_x, rect.center_v())));
    }
    tree.layout_info_mut(node).connector = Some(edges);
}

// ---------------------------------------------------------------------
// Linear : the simple side-by-side base case, with no
// carrier spacers of its own.
// ---------------------------------------------------------------------

fn pre_process_linear(tree: &mut Tree, container: &mut BoxContainer, node: NodeId, columns: usize) {
    let (regulars, _) = partition_children(tree, container, node);
    let columns = columns.max(1).min(regulars.len().max(1));
    let rows = regulars.len().div_ceil(columns.max(1));
    set_sibling_stats(tree, &regulars, rows, columns);
}

fn vertical_linear(
    t: &Tunables,
    tree: &mut Tree,
    container: &mut BoxContainer,
    state: &mut LayoutState,
    node: NodeId,
    recurse: &mut VerticalRecurse<'_>,
) {
    let (regulars, _) = partition_children(tree, container, node);
    let top = tree.layout_info(node).rect().bottom() + t.parent_child_spacing;
    for &child in &regulars {
        let height = tree.layout_info(child).size.height;
        {
            let info = tree.layout_info_mut(child);
            info.top_left.y = top;
            info.siblings_row_v = Dimensions::new(top, top + height);
        }
        recurse(tree, container, state, child);
    }
    fold_branch_exterior(tree, node, &regulars);
}

fn horizontal_linear(
    t: &Tunables,
    tree: &mut Tree,
    container: &mut BoxContainer,
    state: &mut LayoutState,
    node: NodeId,
    recurse: &mut HorizontalRecurse<'_>,
) {
    let (regulars, _) = partition_children(tree, container, node);
    for &child in &regulars {
        recurse(tree, container, state, child);
    }

    // Pack siblings left to right against the skyline of everything already
    // placed, not just the previous sibling's bounding box: an hourglass or
    // staggered subtree can sit closer to its neighbor than a pure
    // width-sum would allow.
    let mut placed = Boundary::new();
    for (i, &child) in regulars.iter().enumerate() {
        let mut candidate = Boundary::new();
        candidate.reload_from_branch(tree, container, child);
        let dx = if i == 0 {
            -tree.layout_info(child).branch_exterior.left()
        } else {
            placed.min_offset_to_clear(&candidate, t.sibling_spacing)
        };
        shift_subtree(tree, child, dx);
        let mut shifted = Boundary::new();
        shifted.reload_from_branch(tree, container, child);
        placed.merge_from(&shifted);
    }

    let parent_center = tree.layout_info(node).rect().center_h();
    if let (Some(&first), Some(&last)) = (regulars.first(), regulars.last()) {
        let block_left = tree.layout_info(first).branch_exterior.left();
        let block_right = tree.layout_info(last).branch_exterior.right();
        let block_center = (block_left + block_right) / 2.0;
        let dx = match t.parent_alignment {
            ParentAlignment::Center => parent_center - block_center,
            ParentAlignment::Left => parent_center + t.parent_connector_shield / 2.0 - block_left,
            ParentAlignment::Right => parent_center - t.parent_connector_shield / 2.0 - block_right,
        };
        for &child in &regulars {
            shift_subtree(tree, child, dx);
        }
    }

    fold_branch_exterior(tree, node, &regulars);
}

fn connectors_linear(_t: &Tunables, tree: &mut Tree, container: &BoxContainer, node: NodeId) {
    let (regulars, _) = partition_children(tree, container, node);
    if regulars.is_empty() {
        tree.layout_info_mut(node).connector = None;
        return;
    }
    let parent_rect = tree.layout_info(node).rect();
    let carrier_x = parent_rect.center_h();
    let drop_y = parent_rect.bottom();
    let mut edges = Vec::new();
    for &child in &regulars {
        let rect = tree.layout_info(child).rect();
        edges.push(edge(Point::new(carrier_x, drop_y), Point::new(carrier_x, rect.center_v())));
        edges.push(edge(Point::new(carrier_x, rect.center_v()), Point::new(rect.left(), rect.center_v())));
    }
    tree.layout_info_mut(node).connector = Some(edges);
}

// ---------------------------------------------------------------------
// MultiLineFishbone
// ---------------------------------------------------------------------

/// The injected spacers for one fishbone group: its vertical carrier, plus
/// (shared across all groups) the parent-drop and horizontal-carrier
/// spacers.
struct FishboneSpacers {
    parent_drop: NodeId,
    group_carriers: Vec<NodeId>,
    horizontal_carrier: Option<NodeId>,
}

fn pre_process_multi_line_fishbone(tree: &mut Tree, container: &mut BoxContainer, node: NodeId, max_groups: usize) {
    let (regulars, _) = partition_children(tree, container, node);
    let n = regulars.len();
    for k in 0..max_groups {
        let (left, right) = group_pillars(n, max_groups, k);
        let max_on_left = left.len();
        for (row, &idx) in left.iter().enumerate() {
            let info = tree.layout_info_mut(regulars[idx]);
            info.number_of_sibling_rows = left.len().max(right.len());
            info.number_of_sibling_columns = 2;
            info.number_of_siblings = n;
            let _ = row;
        }
        for &idx in &right {
            let info = tree.layout_info_mut(regulars[idx]);
            info.number_of_sibling_rows = left.len().max(right.len());
            info.number_of_sibling_columns = 2;
            info.number_of_siblings = n;
        }
        let _ = max_on_left;
    }

    // parent connector spacer: the vertical drop from parent to the
    // horizontal carrier.
    new_spacer(tree, container, node);
    // one vertical-carrier spacer per group.
    for _ in 0..max_groups {
        new_spacer(tree, container, node);
    }
    // one horizontal-carrier spacer, only when there's more than one group.
    if max_groups >= 2 {
        new_spacer(tree, container, node);
    }
}

/// Recovers the spacers `pre_process_multi_line_fishbone` injected, in
/// injection order (parent-drop, then one per group, then an optional
/// horizontal carrier).
fn fishbone_spacers(tree: &Tree, container: &BoxContainer, node: NodeId, max_groups: usize) -> FishboneSpacers {
    let (_, spacers) = partition_children(tree, container, node);
    let parent_drop = spacers[0];
    let group_carriers = spacers[1..=max_groups].to_vec();
    let horizontal_carrier = spacers.get(max_groups + 1).copied();
    FishboneSpacers { parent_drop, group_carriers, horizontal_carrier }
}

fn vertical_multi_line_fishbone(
    t: &Tunables,
    tree: &mut Tree,
    container: &mut BoxContainer,
    state: &mut LayoutState,
    node: NodeId,
    max_groups: usize,
    recurse: &mut VerticalRecurse<'_>,
) {
    let (regulars, _) = partition_children(tree, container, node);
    let n = regulars.len();
    let row_top = tree.layout_info(node).rect().bottom() + t.parent_child_spacing;

    let mut bottom = row_top;
    for k in 0..max_groups {
        let (left_idx, right_idx) = group_pillars(n, max_groups, k);
        let pillars = PillarLayout {
            left: left_idx.iter().map(|&i| regulars[i]).collect(),
            right: right_idx.iter().map(|&i| regulars[i]).collect(),
        };
        let group_bottom = vertical_place_pillars(t, tree, container, state, row_top, &pillars, recurse);
        bottom = bottom.max(group_bottom);
    }

    let _ = bottom;
    fold_branch_exterior(tree, node, &regulars);
}

fn horizontal_multi_line_fishbone(
    t: &Tunables,
    tree: &mut Tree,
    container: &mut BoxContainer,
    state: &mut LayoutState,
    node: NodeId,
    max_groups: usize,
    recurse: &mut HorizontalRecurse<'_>,
) {
    let (regulars, _) = partition_children(tree, container, node);
    let n = regulars.len();
    let spacers = fishbone_spacers(tree, container, node, max_groups);

    let mut carrier_xs = Vec::with_capacity(max_groups);
    for k in 0..max_groups {
        let (left_idx, right_idx) = group_pillars(n, max_groups, k);
        let pillars = PillarLayout {
            left: left_idx.iter().map(|&i| regulars[i]).collect(),
            right: right_idx.iter().map(|&i| regulars[i]).collect(),
        };
        let carrier = spacers.group_carriers.get(k).copied();
        let x = horizontal_place_pillars(t, tree, container, state, &pillars, carrier, recurse);
        carrier_xs.push(x);
    }

    let leftmost = carrier_xs.iter().copied().fold(f64::INFINITY, f64::min);
    let rightmost = carrier_xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let midpoint = (leftmost + rightmost) / 2.0;
    let parent_center = tree.layout_info(node).rect().center_h();
    let dx = parent_center - midpoint;
    for &child in &regulars {
        shift_subtree(tree, child, dx);
    }
    for &carrier in &spacers.group_carriers {
        shift_subtree(tree, carrier, dx);
    }
    if let Some(hc) = spacers.horizontal_carrier {
        shift_subtree(tree, hc, dx);
    }

    let parent_rect = tree.layout_info(node).rect();
    let first_row_top = regulars
    .iter()
    .map(|&c| tree.layout_info(c).siblings_row_v.from)
    .fold(f64::INFINITY, f64::min);

    {
        let info = tree.layout_info_mut(spacers.parent_drop);
        info.top_left = Point::new(parent_center - t.parent_connector_shield / 2.0, parent_rect.bottom());
        info.size = Size::new(t.parent_connector_shield, (first_row_top - t.parent_child_spacing - parent_rect.bottom()).max(0.0));
        info.branch_exterior = info.rect();
    }
    let rect = tree.layout_info(spacers.parent_drop).rect();
    state.merge_spacer(rect);

    if let Some(hc) = spacers.horizontal_carrier {
        let left = leftmost + dx;
        let right = rightmost + dx;
        let y = first_row_top - t.parent_child_spacing;
        let info = tree.layout_info_mut(hc);
        info.top_left = Point::new(left.min(right), y);
        info.size = Size::new((right - left).abs().max(t.sibling_spacing), t.sibling_spacing);
        info.branch_exterior = info.rect();
        let rect = info.rect();
        state.merge_spacer(rect);
    }

    fold_branch_exterior(tree, node, &regulars);
}

fn connectors_multi_line_fishbone(_t: &Tunables, tree: &mut Tree, container: &BoxContainer, node: NodeId, max_groups: usize) {
    let (regulars, _) = partition_children(tree, container, node);
    let n = regulars.len();
    if regulars.is_empty() {
        tree.layout_info_mut(node).connector = None;
        return;
    }
    let spacers = fishbone_spacers(tree, container, node, max_groups);
    let parent_rect = tree.layout_info(node).rect();
    // Each group carrier's column clearance is `child_connector_hook_length`
    // (see `horizontal_place_pillars`), so the hooks below reach it rather
    // than a fixed length of their own.

    let mut edges = Vec::new();
    let hc_y = spacers
    .horizontal_carrier
    .map(|hc| tree.layout_info(hc).rect().top())
    .unwrap_or_else(|| parent_rect.bottom());
    edges.push(edge(Point::new(parent_rect.center_h(), parent_rect.bottom()), Point::new(parent_rect.center_h(), hc_y)));

    if max_groups > 1 {
        let left = spacers
        .group_carriers
        .iter()
        .map(|&c| tree.layout_info(c).rect().center_h())
        .fold(f64::INFINITY, f64::min);
        let right = spacers
        .group_carriers
        .iter()
        .map(|&c| tree.layout_info(c).rect().center_h())
        .fold(f64::NEG_INFINITY, f64::max);
        edges.push(edge(Point::new(left, hc_y), Point::new(right, hc_y)));
    }

    for k in 0..max_groups {
        let (left_idx, right_idx) = group_pillars(n, max_groups, k);
        let Some(&carrier) = spacers.group_carriers.get(k) else { continue };
        let carrier_rect = tree.layout_info(carrier).rect();
        let carrier_x = carrier_rect.center_h();

        let lowest_left = left_idx
        .iter()
        .map(|&i| tree.layout_info(regulars[i]).rect().bottom())
        .fold(f64::NEG_INFINITY, f64::max);
        if lowest_left.is_finite() {
            edges.push(edge(Point::new(carrier_x, hc_y), Point::new(carrier_x, lowest_left)));
        }

        for &i in &left_idx {
            let rect = tree.layout_info(regulars[i]).rect();
            edges.push(edge(Point::new(carrier_x, rect.center_v()), Point::new(rect.right(), rect.center_v())));
        }
        for &i in &right_idx {
            let rect = tree.layout_info(regulars[i]).rect();
            edges.push(edge(Point::new(carrier_x, rect.center_v()), Point::new(rect.left(), rect.center_v())));
        }
    }

    tree.layout_info_mut(node).connector = Some(edges);
}

// ---------------------------------------------------------------------
// FishboneAssistants
// ---------------------------------------------------------------------

fn pre_process_fishbone_assistants(tree: &mut Tree, container: &mut BoxContainer, node: NodeId) {
    let (regulars, _) = partition_children(tree, container, node);
    set_sibling_stats(tree, &regulars, regulars.len(), 2);
    new_spacer(tree, container, node);

    let owner = tree.assistants_owner_of(node);
    let owner_has_regular_children = owner.is_some_and(|o| !partition_children(tree, container, o).0.is_empty());
    if !owner_has_regular_children {
        new_spacer(tree, container, node);
    }
}

fn vertical_fishbone_assistants(
    t: &Tunables,
    tree: &mut Tree,
    container: &mut BoxContainer,
    state: &mut LayoutState,
    node: NodeId,
    recurse: &mut VerticalRecurse<'_>,
) {
    let (regulars, _) = partition_children(tree, container, node);
    let n = regulars.len();
    let row_top = tree.layout_info(node).rect().top();
    let (left_idx, right_idx) = group_pillars(n, 1, 0);
    let pillars = PillarLayout {
        left: left_idx.iter().map(|&i| regulars[i]).collect(),
        right: right_idx.iter().map(|&i| regulars[i]).collect(),
    };
    vertical_place_pillars(t, tree, container, state, row_top, &pillars, recurse);
    fold_branch_exterior(tree, node, &regulars);
}

fn horizontal_fishbone_assistants(
    t: &Tunables,
    tree: &mut Tree,
    container: &mut BoxContainer,
    state: &mut LayoutState,
    node: NodeId,
    recurse: &mut HorizontalRecurse<'_>,
) {
    let (regulars, spacers) = partition_children(tree, container, node);
    let n = regulars.len();
    let (left_idx, right_idx) = group_pillars(n, 1, 0);
    let pillars = PillarLayout {
        left: left_idx.iter().map(|&i| regulars[i]).collect(),
        right: right_idx.iter().map(|&i| regulars[i]).collect(),
    };
    let carrier = spacers.first().copied();
    let carrier_x = horizontal_place_pillars(t, tree, container, state, &pillars, carrier, recurse);

    let parent_center = tree.layout_info(node).rect().center_h();
    let dx = parent_center - carrier_x;
    for &child in &regulars {
        shift_subtree(tree, child, dx);
    }
    for &spacer in &spacers {
        shift_subtree(tree, spacer, dx);
    }

    fold_branch_exterior(tree, node, &regulars);
}

fn connectors_fishbone_assistants(_t: &Tunables, tree: &mut Tree, container: &BoxContainer, node: NodeId) {
    let (regulars, spacers) = partition_children(tree, container, node);
    if regulars.is_empty() {
        tree.layout_info_mut(node).connector = None;
        return;
    }
    let carrier_x = spacers.first().map_or_else(|| tree.layout_info(node).rect().center_h(), |&c| tree.layout_info(c).rect().center_h());

    let mut edges = Vec::new();
    for &child in &regulars {
        let rect = tree.layout_info(child).rect();
        let inner_x = if rect.center_h() < carrier_x { rect.right() } else { rect.left() };
        edges.push(edge(Point::new(carrier_x, rect.center_v()), Point::new(inner_x, rect.center_v())));
    }

    if let Some(owner) = tree.assistants_owner_of(node) {
        let owner_rect = tree.layout_info(owner).rect();
        let lowest = regulars
        .iter()
        .map(|&c| tree.layout_info(c).rect().bottom())
        .fold(f64::NEG_INFINITY, f64::max);
        if lowest.is_finite() {
            edges.push(edge(Point::new(carrier_x, owner_rect.bottom()), Point::new(carrier_x, lowest)));
        }
    }

    tree.layout_info_mut(node).connector = Some(edges);
}

#[cfg(test)]
mod tests {
    use super::*;
    use orgchart_box_tree::SYSTEM_ROOT_ID;

    fn recurse_noop(_t: &mut Tree, _c: &mut BoxContainer, _s: &mut LayoutState, _n: NodeId) {}

    #[test]
    fn single_column_rejects_center() {
        let strategy = LayoutStrategy::SingleColumn {
            tunables: Tunables { parent_alignment: ParentAlignment::Center,..Tunables::default() },
        };
        assert!(matches!(strategy.validate(), Err(StrategyError::SingleColumnRejectsCenter)));
    }

    #[test]
    fn fishbone_requires_center() {
        let strategy = LayoutStrategy::MultiLineFishbone {
            tunables: Tunables { parent_alignment: ParentAlignment::Left,..Tunables::default() },
            max_groups: 1,
        };
        assert!(matches!(strategy.validate(), Err(StrategyError::FishboneRequiresCenter)));
    }

    #[test]
    fn invalid_max_groups_is_rejected() {
        let strategy = LayoutStrategy::MultiLineFishbone { tunables: Tunables::default(), max_groups: 0 };
        assert!(matches!(strategy.validate(), Err(StrategyError::InvalidMaxGroups(0))));
    }

    #[test]
    fn single_column_s2_child_and_connector_positions() {
        let mut container = BoxContainer::new();
        let child_id = container.allocate_id();
        container.insert(OrgBox::new(child_id, SYSTEM_ROOT_ID, Size::new(40.0, 20.0)));
        let mut tree = Tree::build(&mut container).unwrap();
        let root = tree.root().unwrap();

        let strategy = LayoutStrategy::SingleColumn { tunables: Tunables::default() };
        strategy.pre_process(&mut tree, &mut container, root).unwrap();

        let mut state = LayoutState::new(tree.depth() + 1);
        strategy.apply_vertical_layout(&mut tree, &mut container, &mut state, root, &mut recurse_noop);
        strategy.apply_horizontal_layout(&mut tree, &mut container, &mut state, root, &mut recurse_noop);
        strategy.route_connectors(&mut tree, &container, root);

        let child = tree.children_of(root)[0];
        let child_rect = tree.layout_info(child).rect();
        assert!((child_rect.top_left.x - 24.0).abs() < 1e-9);
        assert!((child_rect.top_left.y - 30.0).abs() < 1e-9);

        let connector = tree.layout_info(root).connector.clone().unwrap();
        assert_eq!(connector.len(), 2);
    }
}
