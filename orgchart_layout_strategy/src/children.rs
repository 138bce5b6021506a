// Copyright 2026 the OrgChart Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small helpers every strategy variant shares: separating a node's
//! strategy-injected spacers from its real children, and shifting/aligning
//! already-placed subtrees (see `DESIGN.md` for why this
//! crate keeps its own copies rather than depending on `orgchart_layout`).

use orgchart_box_tree::{BoxContainer, NodeId, Tree};

/// Splits `node`'s regular children into (real children, strategy-injected
/// spacers), preserving relative order within each group.
#[must_use]
pub fn partition_children(tree: &Tree, container: &BoxContainer, node: NodeId) -> (Vec<NodeId>, Vec<NodeId>) {
    let mut real = Vec::new();
    let mut spacers = Vec::new();
    for &child in tree.children_of(node) {
        if tree.is_special(child, container) {
            spacers.push(child);
        } else {
            real.push(child);
        }
    }
    (real, spacers)
}

/// Shifts `node`'s placed rect and `branch_exterior` by `dx`, and recurses
/// into its `assistants_root` and every regular child doing the same.
/// Does not touch any [`orgchart_layout_state::Boundary`] — callers reload
/// boundaries from the branch separately once all shifting is done.
pub fn shift_subtree(tree: &mut Tree, node: NodeId, dx: f64) {
    if dx == 0.0 {
        return;
    }
    {
        let info = tree.layout_info_mut(node);
        info.top_left.x += dx;
        info.branch_exterior = info.branch_exterior.translate(dx, 0.0);
    }
    if let Some(ar) = tree.assistants_root_of(node) {
        shift_subtree(tree, ar, dx);
    }
    for child in tree.children_of(node).to_vec() {
        shift_subtree(tree, child, dx);
    }
}

/// The largest `center_h` among `nodes`' current placed rects, or `None` for
/// an empty slice.
#[must_use]
pub fn max_center_h(tree: &Tree, nodes: &[NodeId]) -> Option<f64> {
    nodes
    .iter()
    .map(|&n| tree.layout_info(n).rect().center_h())
    .fold(None, |acc, c| Some(acc.map_or(c, |a: f64| a.max(c))))
}

/// Shifts every node in `nodes` rightward so every one's `center_h` equals
/// the maximum among them. Returns the aligned center, or `None` if `nodes` is empty.
pub fn align_horizontal_centers(tree: &mut Tree, nodes: &[NodeId]) -> Option<f64> {
    let target = max_center_h(tree, nodes)?;
    for &n in nodes {
        let current = tree.layout_info(n).rect().center_h();
        shift_subtree(tree, n, target - current);
    }
    Some(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orgchart_box_tree::{Box, SYSTEM_ROOT_ID};
    use orgchart_geometry::Size;

    #[test]
    fn align_horizontal_centers_shifts_to_the_max() {
        let mut container = BoxContainer::new();
        let a = container.allocate_id();
        container.insert(Box::new(a, SYSTEM_ROOT_ID, Size::new(10.0, 10.0)));
        let b = container.allocate_id();
        container.insert(Box::new(b, SYSTEM_ROOT_ID, Size::new(40.0, 10.0)));
        let mut tree = Tree::build(&mut container).unwrap();
        let root = tree.root().unwrap();
        let children = tree.children_of(root).to_vec();

        align_horizontal_centers(&mut tree, &children);
        let centers: Vec<f64> = children.iter().map(|&n| tree.layout_info(n).rect().center_h()).collect();
        assert!((centers[0] - centers[1]).abs() < 1e-9);
    }
}
