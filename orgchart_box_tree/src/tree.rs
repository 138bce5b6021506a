// Copyright 2026 the OrgChart Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`Tree`]: the visual tree built from a [`crate::BoxContainer`].

use std::collections::HashMap;

use orgchart_geometry::{Point, Size};

use crate::box_model::Box;
use crate::container::BoxContainer;
use crate::error::BoxTreeError;
use crate::ids::{BoxId, NodeId};
use crate::node::{Node, NodeLayoutInfo};

/// The visual tree: one arena-backed [`Node`] per laid-out box, built once
/// per `apply()` call from a [`BoxContainer`] (see `orgchart_box_tree::node`'s
/// doc comment for why there is no separate `TreeNode` struct).
///
/// Structurally grounded on `understory_box_tree::tree::Tree`: a
/// generation-tagged `Vec<Option<Node>>` arena plus a free list, so stale
/// `NodeId`s from a previous `apply()` are rejected rather than silently
/// aliasing a reused slot.
#[derive(Debug, Default)]
pub struct Tree {
    nodes: Vec<Option<Node>>,
    generations: Vec<u32>,
    free_list: Vec<usize>,
    root: Option<NodeId>,
    /// The deepest 0-based `LayoutState` frame index reached while laying
    /// out this tree, computed by [`Tree::update_hierarchy_stats`]. One more
    /// than `level`'s own max whenever an `assistants_root` sits on the
    /// deepest path, since pushing its frame does not advance `level`.
    depth: u32,
}

impl Tree {
    /// An empty tree with no root.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The system root's [`NodeId`], if the tree has been built.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// The tree's depth, as of the last [`Tree::update_hierarchy_stats`]
    /// call: the deepest 0-based `LayoutState` frame index a correctly
    /// driven `apply()` run reaches, so `LayoutState::new(tree.depth() + 1)`
    /// always sizes the boundary pool to cover the root frame plus every
    /// frame below it — including the transient frame each `assistants_root`
    /// hop pushes on top of its still-open owner frame. Not the same as the
    /// max `level`: an `assistants_root` shares its owner's `level` but
    /// still costs one more stack frame.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Builds a [`Tree`] from a [`BoxContainer`].
    ///
    /// Takes `container` mutably because an `is_assistant` box whose owner
    /// needs an `assistants_root` for the first time causes one to be
    /// minted: a fresh synthetic [`Box`] is inserted into `container` and a
    /// matching arena node created here.
    ///
    /// # Errors
    ///
    /// Returns [`BoxTreeError::NoSystemRoot`] / [`BoxTreeError::SystemRootMissing`]
    /// if `container` has no usable system root, or
    /// [`BoxTreeError::MultipleRoots`] if, after every box is attached, more
    /// than one root remains (a fatal invariant, not
    /// the permissive per-box orphan recovery of step 2/3, which only
    /// produces *additional* roots without itself erroring).
    pub fn build(container: &mut BoxContainer) -> Result<Self, BoxTreeError> {
        let system_root_box_id = container
            .system_root()
            .ok_or(BoxTreeError::NoSystemRoot)?;
        if container.get(system_root_box_id).is_none() {
            return Err(BoxTreeError::SystemRootMissing(system_root_box_id));
        }

        let mut tree = Self::empty();
        let mut id_map: HashMap<BoxId, NodeId> = HashMap::new();

        let all_ids: Vec<BoxId> = container.iter().map(|(id, _)| *id).collect();
        for box_id in &all_ids {
            let size = container.get(*box_id).map(Box::size).unwrap_or(Size::ZERO);
            let node_id = tree.alloc_node(*box_id, size);
            id_map.insert(*box_id, node_id);
        }

        let root_node_id = id_map[&system_root_box_id];
        tree.root = Some(root_node_id);

        for box_id in &all_ids {
            if *box_id == system_root_box_id {
                continue;
            }
            let node_id = id_map[box_id];
            let parent_box_id = container.get(*box_id).map(Box::parent_id).unwrap_or(BoxId::NONE);

            if parent_box_id.is_none() {
                tracing::warn!(?box_id, "box has no parent id; attaching as extra root");
                continue;
            }

            let Some(&parent_node_id) = id_map.get(&parent_box_id) else {
                tracing::warn!(
                    ?box_id,
                    ?parent_box_id,
                    "box parent missing from container; attaching as extra root"
                );
                continue;
            };

            let is_assistant = container.get(*box_id).is_some_and(Box::is_assistant);
            let parent_has_grandparent = container
                .get(parent_box_id)
                .is_some_and(|p| !p.parent_id().is_none());

            if is_assistant && parent_has_grandparent {
                let ar_node_id = tree.ensure_assistants_root(container, parent_node_id);
                tree.link_regular_child(ar_node_id, node_id);
            } else {
                tree.link_regular_child(parent_node_id, node_id);
            }
        }

        let roots: Vec<NodeId> = (0..tree.nodes.len())
            .filter_map(|idx| {
                let slot = tree.nodes[idx].as_ref()?;
                if slot.parent.is_none() {
                    Some(NodeId::new(idx as u32, slot.generation))
                } else {
                    None
                }
            })
            .collect();

        if roots.len() != 1 || roots[0] != root_node_id {
            let extra: Vec<BoxId> = roots
                .iter()
                .filter(|&&r| r != root_node_id)
                .map(|&r| tree.box_id_of(r))
                .collect();
            return Err(BoxTreeError::MultipleRoots(extra));
        }

        Ok(tree)
    }

    fn alloc_node(&mut self, box_id: BoxId, size: Size) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, box_id, Point::ZERO, size));
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, box_id, Point::ZERO, size)));
            self.generations.push(generation);
            (self.nodes.len() - 1, generation)
        };
        #[allow(clippy::cast_possible_truncation, reason = "arenas stay well under u32::MAX nodes")]
        NodeId::new(idx as u32, generation)
    }

    /// Appends a brand-new child [`Box`] (typically a strategy-injected
    /// spacer) under `parent`, inserting it into `container` and linking a
    /// matching arena node as a regular child.
    pub fn add_child(&mut self, container: &mut BoxContainer, parent: NodeId, b: Box) -> NodeId {
        let box_id = b.id();
        let size = b.size();
        container.insert(b);
        let node_id = self.alloc_node(box_id, size);
        self.link_regular_child(parent, node_id);
        node_id
    }

    fn ensure_assistants_root(&mut self, container: &mut BoxContainer, owner: NodeId) -> NodeId {
        if let Some(existing) = self.nodes[owner.idx()].as_ref().and_then(|n| n.assistants_root) {
            return existing;
        }
        let owner_box_id = self.nodes[owner.idx()].as_ref().expect("live owner").box_id;
        let new_box_id = container.allocate_id();
        let special = Box::new_special(new_box_id, owner_box_id, Size::ZERO);
        container.insert(special);
        let ar_node_id = self.alloc_node(new_box_id, Size::ZERO);
        if let Some(ar) = self.nodes[ar_node_id.idx()].as_mut() {
            ar.is_assistants_root = true;
            ar.assistants_owner = Some(owner);
            ar.parent = Some(owner);
        }
        if let Some(owner_node) = self.nodes[owner.idx()].as_mut() {
            owner_node.assistants_root = Some(ar_node_id);
        }
        ar_node_id
    }

    fn link_regular_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(c) = self.nodes[child.idx()].as_mut() {
            c.parent = Some(parent);
        }
        if let Some(p) = self.nodes[parent.idx()].as_mut() {
            p.children.push(child);
        }
    }

    fn node_ref(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.idx())?.as_ref().filter(|n| n.generation == id.1)
    }

    fn node_mut_ref(&mut self, id: NodeId) -> Option<&mut Node> {
        let idx = id.idx();
        let gen = id.1;
        self.nodes.get_mut(idx)?.as_mut().filter(|n| n.generation == gen)
    }

    /// Whether `id` refers to a live node in this tree.
    #[must_use]
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.node_ref(id).is_some()
    }

    /// The underlying [`BoxId`] for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is stale; this mirrors `understory_box_tree`'s choice
    /// to treat a dangling handle as a programmer error rather than a
    /// recoverable condition once a tree has been built.
    #[must_use]
    pub fn box_id_of(&self, id: NodeId) -> BoxId {
        self.node_ref(id).expect("stale NodeId").box_id
    }

    /// `id`'s depth from the system root (root = 0).
    #[must_use]
    pub fn level_of(&self, id: NodeId) -> u32 {
        self.node_ref(id).expect("stale NodeId").level
    }

    /// `id`'s parent, or `None` for the root.
    #[must_use]
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node_ref(id).expect("stale NodeId").parent
    }

    /// `id`'s regular children, in order.
    #[must_use]
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.node_ref(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// `id`'s `assistants_root`, if it has assistants.
    #[must_use]
    pub fn assistants_root_of(&self, id: NodeId) -> Option<NodeId> {
        self.node_ref(id).expect("stale NodeId").assistants_root
    }

    /// Whether `id` is itself an `assistants_root` node.
    #[must_use]
    pub fn is_assistants_root(&self, id: NodeId) -> bool {
        self.node_ref(id).expect("stale NodeId").is_assistants_root
    }

    /// The owner of an `assistants_root` node, or `None` for any other node.
    #[must_use]
    pub fn assistants_owner_of(&self, id: NodeId) -> Option<NodeId> {
        self.node_ref(id).expect("stale NodeId").assistants_owner
    }

    /// Read-only access to `id`'s [`NodeLayoutInfo`].
    #[must_use]
    pub fn layout_info(&self, id: NodeId) -> &NodeLayoutInfo {
        &self.node_ref(id).expect("stale NodeId").layout
    }

    /// Mutable access to `id`'s [`NodeLayoutInfo`].
    pub fn layout_info_mut(&mut self, id: NodeId) -> &mut NodeLayoutInfo {
        &mut self.node_mut_ref(id).expect("stale NodeId").layout
    }

    /// Whether `id`'s underlying box is collapsed.
    #[must_use]
    pub fn is_collapsed(&self, id: NodeId, container: &BoxContainer) -> bool {
        container
            .get(self.box_id_of(id))
            .is_some_and(Box::is_collapsed)
    }

    /// Whether `id`'s underlying box currently affects layout.
    #[must_use]
    pub fn affects_layout(&self, id: NodeId, container: &BoxContainer) -> bool {
        container
            .get(self.box_id_of(id))
            .is_some_and(Box::affects_layout)
    }

    /// Whether `id`'s underlying box is a synthetic spacer.
    #[must_use]
    pub fn is_special(&self, id: NodeId, container: &BoxContainer) -> bool {
        container.get(self.box_id_of(id)).is_some_and(Box::is_special)
    }

    /// Recomputes every node's `level` and the tree's overall `depth`.
    ///
    /// An `assistants_root`'s own level equals its owner's level (it is not a
    /// regular generation deeper), and — critically — that rule is applied
    /// at traversal time, every time this function runs, rather than being
    /// pinned once on the arena slot whenever an assistant was first
    /// attached. A child of an assistants_root is therefore exactly as deep
    /// as a regular child of the owner would be (`owner.level + 1`), not one
    /// level deeper for having passed through the assistants_root.
    ///
    /// `depth` tracks something related but distinct from `level`: the
    /// deepest `LayoutState` frame index reached. `vertical_layout`/
    /// `horizontal_layout` push a frame for an `assistants_root` on top of
    /// its owner's still-open frame before that owner's own regular children
    /// are visited, so each `assistants_root` hop costs one stack frame
    /// `level` never counts.
    pub fn update_hierarchy_stats(&mut self) {
        let Some(root) = self.root else {
            self.depth = 0;
            return;
        };
        self.depth = 0;
        self.assign_level(root, 0, 0);
    }

    fn assign_level(&mut self, id: NodeId, level: u32, stack_depth: u32) {
        if let Some(n) = self.node_mut_ref(id) {
            n.level = level;
        }
        self.depth = self.depth.max(stack_depth);

        if let Some(ar) = self.assistants_root_of(id) {
            // The assistants_root shares its owner's level but is pushed as
            // its own frame, one deeper than the owner's currently-open one.
            self.assign_level(ar, level, stack_depth + 1);
        }
        let children: Vec<NodeId> = self.children_of(id).to_vec();
        for child in children {
            self.assign_level(child, level + 1, stack_depth + 1);
        }
    }

    /// Propagates `affects_layout` top-down: a node affects layout iff it has
    /// no parent, or its parent affects layout and is not collapsed.
    pub fn propagate_affects_layout(&mut self, container: &mut BoxContainer) {
        let Some(root) = self.root else { return };
        self.propagate_affects_layout_rec(root, true, container);
    }

    fn propagate_affects_layout_rec(&mut self, id: NodeId, parent_affects: bool, container: &mut BoxContainer) {
        let box_id = self.box_id_of(id);
        if let Some(b) = container.get_mut(box_id) {
            b.set_affects_layout(parent_affects);
        }
        let this_is_collapsed = container.get(box_id).is_some_and(Box::is_collapsed);
        let children_affect = parent_affects && !this_is_collapsed;

        if let Some(ar) = self.assistants_root_of(id) {
            self.propagate_affects_layout_rec(ar, children_affect, container);
        }
        let children: Vec<NodeId> = self.children_of(id).to_vec();
        for child in children {
            self.propagate_affects_layout_rec(child, children_affect, container);
        }
    }

    /// Child-first traversal: visits the `assistants_root`
    /// subtree, then each regular child subtree, then `id` itself. Stops
    /// traversing (propagating `false` back up through every enclosing
    /// call) as soon as `visit` returns `false`.
    ///
    /// Returns `false` if traversal was stopped early, `true` if it ran to
    /// completion.
    pub fn child_first(&self, id: NodeId, visit: &mut dyn FnMut(&Tree, NodeId) -> bool) -> bool {
        if let Some(ar) = self.assistants_root_of(id)
            && !self.child_first(ar, visit)
        {
            return false;
        }
        for &child in self.children_of(id).to_vec().iter() {
            if !self.child_first(child, visit) {
                return false;
            }
        }
        visit(self, id)
    }

    /// Parent-first traversal with enter/exit hooks: calls
    /// `enter(id)`; if it returns `false`, calls `exit(id)` (if present) and
    /// does not descend. Otherwise recurses into the `assistants_root`
    /// subtree, then each regular child, then calls `exit(id)`.
    ///
    /// Each subtree decides independently whether to descend — returning
    /// `false` from `enter` for one sibling does not affect any other.
    pub fn parent_first(
        &self,
        id: NodeId,
        enter: &mut dyn FnMut(&Tree, NodeId) -> bool,
        exit: Option<&mut dyn FnMut(&Tree, NodeId)>,
    ) {
        self.parent_first_inner(id, enter, exit);
    }

    fn parent_first_inner(
        &self,
        id: NodeId,
        enter: &mut dyn FnMut(&Tree, NodeId) -> bool,
        mut exit: Option<&mut dyn FnMut(&Tree, NodeId)>,
    ) {
        let descend = enter(self, id);
        if !descend {
            if let Some(exit_fn) = exit.as_deref_mut() {
                exit_fn(self, id);
            }
            return;
        }
        if let Some(ar) = self.assistants_root_of(id) {
            self.parent_first_inner(ar, enter, exit.as_deref_mut());
        }
        for &child in self.children_of(id).to_vec().iter() {
            self.parent_first_inner(child, enter, exit.as_deref_mut());
        }
        if let Some(exit_fn) = exit.as_deref_mut() {
            exit_fn(self, id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::SYSTEM_ROOT_ID;

    fn child_box(container: &mut BoxContainer, parent: BoxId, size: Size) -> BoxId {
        let id = container.allocate_id();
        container.insert(Box::new(id, parent, size));
        id
    }

    #[test]
    fn build_single_root_tree() {
        let mut container = BoxContainer::new();
        let a = child_box(&mut container, SYSTEM_ROOT_ID, Size::new(40.0, 20.0));
        let tree = Tree::build(&mut container).unwrap();
        let root = tree.root().unwrap();
        assert_eq!(tree.box_id_of(root), SYSTEM_ROOT_ID);
        assert_eq!(tree.children_of(root).len(), 1);
        assert_eq!(tree.box_id_of(tree.children_of(root)[0]), a);
    }

    #[test]
    fn orphan_parent_becomes_extra_root_and_fails_single_root_check() {
        let mut container = BoxContainer::new();
        let missing_parent = BoxId::new(999);
        let id = container.allocate_id();
        container.insert(Box::new(id, missing_parent, Size::ZERO));
        let err = Tree::build(&mut container).unwrap_err();
        match err {
            BoxTreeError::MultipleRoots(extra) => assert_eq!(extra, vec![id]),
            other => panic!("expected MultipleRoots, got {other:?}"),
        }
    }

    #[test]
    fn assistant_of_non_root_attaches_under_assistants_root() {
        let mut container = BoxContainer::new();
        let mid = child_box(&mut container, SYSTEM_ROOT_ID, Size::new(40.0, 20.0));
        let assistant_id = container.allocate_id();
        let mut assistant = Box::new(assistant_id, mid, Size::new(40.0, 20.0));
        assistant.set_is_assistant(true);
        container.insert(assistant);

        let tree = Tree::build(&mut container).unwrap();
        let root = tree.root().unwrap();
        let mid_node = tree.children_of(root)[0];
        let ar = tree.assistants_root_of(mid_node).expect("assistants_root created");
        assert!(tree.is_assistants_root(ar));
        assert_eq!(tree.children_of(ar).len(), 1);
        assert_eq!(tree.box_id_of(tree.children_of(ar)[0]), assistant_id);
        // A direct child of `mid` is unaffected and stays a regular child.
        assert_eq!(tree.children_of(mid_node).len(), 1);
    }

    #[test]
    fn assistant_of_root_attaches_as_regular_child() {
        // only attaches under assistants_root when
        // the parent itself has a non-NONE grandparent. The system root's
        // parent is NONE, so an assistant attached directly to the root
        // becomes a regular child instead.
        let mut container = BoxContainer::new();
        let assistant_id = container.allocate_id();
        let mut assistant = Box::new(assistant_id, SYSTEM_ROOT_ID, Size::new(40.0, 20.0));
        assistant.set_is_assistant(true);
        container.insert(assistant);

        let tree = Tree::build(&mut container).unwrap();
        let root = tree.root().unwrap();
        assert!(tree.assistants_root_of(root).is_none());
        assert_eq!(tree.children_of(root).len(), 1);
    }

    #[test]
    fn hierarchy_levels_match_owner_for_assistants_children() {
        let mut container = BoxContainer::new();
        let mid = child_box(&mut container, SYSTEM_ROOT_ID, Size::new(40.0, 20.0));
        let assistant_id = container.allocate_id();
        let mut assistant = Box::new(assistant_id, mid, Size::new(40.0, 20.0));
        assistant.set_is_assistant(true);
        container.insert(assistant);

        let mut tree = Tree::build(&mut container).unwrap();
        tree.update_hierarchy_stats();
        let root = tree.root().unwrap();
        let mid_node = tree.children_of(root)[0];
        let ar = tree.assistants_root_of(mid_node).unwrap();
        let assistant_node = tree.children_of(ar)[0];

        assert_eq!(tree.level_of(root), 0);
        assert_eq!(tree.level_of(mid_node), 1);
        assert_eq!(tree.level_of(ar), tree.level_of(mid_node));
        assert_eq!(tree.level_of(assistant_node), tree.level_of(mid_node) + 1);
    }

    #[test]
    fn affects_layout_is_false_under_collapsed_ancestor() {
        let mut container = BoxContainer::new();
        let mid = child_box(&mut container, SYSTEM_ROOT_ID, Size::new(40.0, 20.0));
        let leaf = child_box(&mut container, mid, Size::new(40.0, 20.0));
        container.get_mut(mid).unwrap().set_collapsed(true);

        let mut tree = Tree::build(&mut container).unwrap();
        tree.propagate_affects_layout(&mut container);

        assert!(tree.affects_layout(tree.root().unwrap(), &container));
        let mid_node = tree.children_of(tree.root().unwrap())[0];
        assert!(tree.affects_layout(mid_node, &container));
        let leaf_node = tree.children_of(mid_node)[0];
        assert_eq!(tree.box_id_of(leaf_node), leaf);
        assert!(!tree.affects_layout(leaf_node, &container));
    }

    #[test]
    fn child_first_visits_self_last() {
        let mut container = BoxContainer::new();
        let a = child_box(&mut container, SYSTEM_ROOT_ID, Size::new(40.0, 20.0));
        let _b = child_box(&mut container, a, Size::new(40.0, 20.0));
        let tree = Tree::build(&mut container).unwrap();
        let root = tree.root().unwrap();

        let mut order = Vec::new();
        tree.child_first(root, &mut |t, id| {
            order.push(t.box_id_of(id));
            true
        });
        assert_eq!(*order.last().unwrap(), SYSTEM_ROOT_ID);
    }

    #[test]
    fn parent_first_enter_false_skips_descent_but_not_siblings() {
        let mut container = BoxContainer::new();
        let a = child_box(&mut container, SYSTEM_ROOT_ID, Size::new(40.0, 20.0));
        let b = child_box(&mut container, SYSTEM_ROOT_ID, Size::new(40.0, 20.0));
        let _a_child = child_box(&mut container, a, Size::new(40.0, 20.0));
        let tree = Tree::build(&mut container).unwrap();
        let root = tree.root().unwrap();

        let mut visited = Vec::new();
        tree.parent_first(
            root,
            &mut |t, id| {
                visited.push(t.box_id_of(id));
                t.box_id_of(id) != a
            },
            None,
        );
        assert!(visited.contains(&a));
        assert!(visited.contains(&b));
        // a's child must not have been visited since entering `a` returned false.
        assert_eq!(visited.len(), 3);
    }
}
