// Copyright 2026 the OrgChart Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`LayoutAlgorithm`]: the top-level `apply()` driver.

use std::collections::HashMap;

use orgchart_box_tree::{BoxContainer, BoxId, NodeId, Tree};
use orgchart_geometry::{Point, Rect, Size};
use orgchart_layout_state::{LayoutObserver, LayoutState, Operation};
use orgchart_layout_strategy::{HorizontalRecurse, LayoutStrategy, VerticalRecurse};

use crate::error::LayoutError;
use crate::result::LayoutResult;
use crate::settings::DiagramLayoutSettings;

/// The top-level layout driver.
///
/// Borrows an immutable [`DiagramLayoutSettings`] and carries the optional
/// per-run collaborators (a `data_id -> Size` lookup, an observer hook) as
/// builder fields — `apply()` itself takes only the [`BoxContainer`] to lay
/// out, so the same `LayoutAlgorithm` can drive many independent runs.
pub struct LayoutAlgorithm<'s> {
    settings: &'s DiagramLayoutSettings,
    size_lookup: Option<Box<dyn Fn(&str) -> Option<Size> + 's>>,
    observer: Option<Box<dyn LayoutObserver>>,
}

impl<'s> LayoutAlgorithm<'s> {
    /// A driver over `settings`, with no size lookup or observer installed.
    #[must_use]
    pub fn new(settings: &'s DiagramLayoutSettings) -> Self {
        Self { settings, size_lookup: None, observer: None }
    }

    /// Installs a `data_id -> Size` lookup, invoked once per data-bound box
    /// before layout begins.
    #[must_use]
    pub fn with_size_lookup(mut self, lookup: impl Fn(&str) -> Option<Size> + 's) -> Self {
        self.size_lookup = Some(Box::new(lookup));
        self
    }

    /// Installs an observer for `boundary_changed`/`operation_changed`
    /// hooks. The observer is reclaimed at the end of
    /// `apply`, so the same `LayoutAlgorithm` can drive another run with it
    /// still installed.
    #[must_use]
    pub fn with_observer(mut self, observer: impl LayoutObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Runs the full layout pipeline over `container` and returns the placed geometry.
    ///
    /// `container` is not mutated: `apply` clones it into a working copy
    /// before injecting strategy spacers, so a host can freely call
    /// `apply` again (after toggling `is_collapsed`, say) without the
    /// previous run's synthetic boxes leaking into the next (every call starts
    /// from the same caller-owned container).
    ///
    /// # Errors
    ///
    /// See [`LayoutError`].
    pub fn apply(&mut self, container: &BoxContainer) -> Result<LayoutResult, LayoutError> {
        let span = tracing::info_span!("layout_apply");
        let _guard = span.enter();

        if !self.settings.layout_strategies.contains_key(&self.settings.default_layout_strategy_id) {
            return Err(LayoutError::DefaultStrategyMissing(self.settings.default_layout_strategy_id.clone()));
        }
        if !self
            .settings
            .layout_strategies
            .contains_key(&self.settings.default_assistant_layout_strategy_id)
        {
            return Err(LayoutError::DefaultAssistantStrategyMissing(
                self.settings.default_assistant_layout_strategy_id.clone(),
            ));
        }

        let mut working = container.clone();
        if let Some(lookup) = &self.size_lookup {
            apply_size_lookup(&mut working, lookup.as_ref());
        }

        let mut tree = Tree::build(&mut working)?;
        tree.update_hierarchy_stats();
        tree.propagate_affects_layout(&mut working);
        tracing::debug!(depth = tree.depth(), "visual tree built");

        let mut state = LayoutState::new(tree.depth() + 1);
        if let Some(observer) = self.observer.take() {
            state.set_observer(observer);
        }

        let root = tree.root().expect("Tree::build guarantees exactly one root");

        state.set_operation(Operation::Preprocess);
        self.preprocess(&mut tree, &mut working, root)?;

        state.set_operation(Operation::Vertical);
        state.push_layout_level(root)?;
        self.vertical_layout(&mut tree, &mut working, &mut state, root)?;
        state.pop_layout_level()?;

        state.set_operation(Operation::Horizontal);
        state.push_layout_level(root)?;
        self.horizontal_layout(&mut tree, &mut working, &mut state, root)?;
        state.pop_layout_level()?;

        state.set_operation(Operation::Connectors);
        self.route_connectors(&mut tree, &working, root)?;

        state.set_operation(Operation::Completed);
        tracing::debug!("layout run completed");
        self.observer = state.take_observer();

        let index = build_index(&tree, root);
        Ok(LayoutResult::new(tree, working, index))
    }

    /// Preprocess phase: parent-first, resolves each
    /// node's `effective_layout_strategy`, invokes `pre_process`, and
    /// descends only into non-collapsed subtrees.
    fn preprocess(&self, tree: &mut Tree, container: &mut BoxContainer, root: NodeId) -> Result<(), LayoutError> {
        let mut err: Option<LayoutError> = None;
        tree.parent_first(
            root,
            &mut |tree, node| {
                if err.is_some() {
                    return false;
                }
                let is_ar = tree.is_assistants_root(node);
                let strategy_id = resolve_strategy_id(tree, container, node, is_ar, self.settings);
                let Some(strategy) = self.settings.layout_strategies.get(&strategy_id) else {
                    err = Some(LayoutError::StrategyMissing(strategy_id));
                    return false;
                };
                tree.layout_info_mut(node).effective_layout_strategy = Some(strategy_id);
                if let Err(e) = strategy.pre_process(tree, container, node) {
                    err = Some(e.into());
                    return false;
                }
                let has_ar = tree.assistants_root_of(node).is_some();
                let has_children = !tree.children_of(node).is_empty();
                !tree.is_collapsed(node, container) && (has_children || has_ar)
            },
            None,
        );
        match err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Vertical phase: child-first by construction — each level's own children
    /// are positioned only after the recursive call into them returns.
    fn vertical_layout(
        &self,
        tree: &mut Tree,
        container: &mut BoxContainer,
        state: &mut LayoutState,
        node: NodeId,
    ) -> Result<(), LayoutError> {
        if let Some(ar) = tree.assistants_root_of(node) {
            let owner_rect = tree.layout_info(node).rect();
            {
                let info = tree.layout_info_mut(ar);
                info.top_left = owner_rect.top_left;
                info.size = owner_rect.size;
                info.branch_exterior = info.rect();
            }
            state.push_layout_level(ar)?;
            self.run_strategy_vertical(tree, container, state, ar)?;
            state.pop_layout_level()?;
        }
        self.run_strategy_vertical(tree, container, state, node)
    }

    fn run_strategy_vertical(
        &self,
        tree: &mut Tree,
        container: &mut BoxContainer,
        state: &mut LayoutState,
        node: NodeId,
    ) -> Result<(), LayoutError> {
        if tree.is_collapsed(node, container) {
            return Ok(());
        }
        let strategy = self.strategy_for(tree, node)?;
        let mut first_err: Option<LayoutError> = None;
        {
            let mut recurse: Box<VerticalRecurse<'_>> = Box::new(|tree, container, state, child| {
                if first_err.is_some() {
                    return;
                }
                if let Err(e) = state.push_layout_level(child) {
                    first_err = Some(e.into());
                    return;
                }
                if let Err(e) = self.vertical_layout(tree, container, state, child) {
                    first_err = Some(e);
                }
                let _ = state.pop_layout_level();
            });
            strategy.apply_vertical_layout(tree, container, state, node, &mut recurse);
        }
        first_err.map_or(Ok(()), Err)
    }

    /// Horizontal phase: same shape as the vertical
    /// phase, run only after every `top_left.y` is final.
    fn horizontal_layout(
        &self,
        tree: &mut Tree,
        container: &mut BoxContainer,
        state: &mut LayoutState,
        node: NodeId,
    ) -> Result<(), LayoutError> {
        if let Some(ar) = tree.assistants_root_of(node) {
            state.push_layout_level(ar)?;
            self.run_strategy_horizontal(tree, container, state, ar)?;
            state.pop_layout_level()?;
        }
        self.run_strategy_horizontal(tree, container, state, node)
    }

    fn run_strategy_horizontal(
        &self,
        tree: &mut Tree,
        container: &mut BoxContainer,
        state: &mut LayoutState,
        node: NodeId,
    ) -> Result<(), LayoutError> {
        if tree.is_collapsed(node, container) {
            return Ok(());
        }
        let strategy = self.strategy_for(tree, node)?;
        let mut first_err: Option<LayoutError> = None;
        {
            let mut recurse: Box<HorizontalRecurse<'_>> = Box::new(|tree, container, state, child| {
                if first_err.is_some() {
                    return;
                }
                if let Err(e) = state.push_layout_level(child) {
                    first_err = Some(e.into());
                    return;
                }
                if let Err(e) = self.horizontal_layout(tree, container, state, child) {
                    first_err = Some(e);
                }
                let _ = state.pop_layout_level();
            });
            strategy.apply_horizontal_layout(tree, container, state, node, &mut recurse);
        }
        first_err.map_or(Ok(()), Err)
    }

    /// Connector phase: parent-first, skips
    /// collapsed subtrees and special non-`assistants_root` nodes (plain
    /// spacers never route their own connectors).
    fn route_connectors(&self, tree: &mut Tree, container: &BoxContainer, root: NodeId) -> Result<(), LayoutError> {
        let mut err: Option<LayoutError> = None;
        tree.parent_first(
            root,
            &mut |tree, node| {
                if err.is_some() {
                    return false;
                }
                if tree.is_collapsed(node, container) {
                    return false;
                }
                if tree.is_special(node, container) && !tree.is_assistants_root(node) {
                    return false;
                }
                let strategy = match self.strategy_for(tree, node) {
                    Ok(s) => s,
                    Err(e) => {
                        err = Some(e);
                        return false;
                    }
                };
                strategy.route_connectors(tree, container, node);
                true
            },
            None,
        );
        match err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn strategy_for<'a>(&'a self, tree: &Tree, node: NodeId) -> Result<&'a LayoutStrategy, LayoutError> {
        let id = tree
        .layout_info(node)
        .effective_layout_strategy
        .clone()
        .expect("preprocess resolves effective_layout_strategy for every visited node");
        self.settings
        .layout_strategies
        .get(&id)
        .ok_or(LayoutError::StrategyMissing(id))
    }
}

/// Walks from `node` up through its ancestors looking for a per-box
/// strategy override, falling
/// back to the diagram's default once the walk reaches the system root.
fn resolve_strategy_id(tree: &Tree, container: &BoxContainer, node: NodeId, is_assistants_root: bool, settings: &DiagramLayoutSettings) -> String {
    let mut current = Some(node);
    while let Some(n) = current {
        let box_id = tree.box_id_of(n);
        if let Some(b) = container.get(box_id) {
            let over = if is_assistants_root { b.assistant_layout_strategy_id() } else { b.layout_strategy_id() };
            if let Some(id) = over {
                return id.to_string();
            }
        }
        current = tree.parent_of(n);
    }
    if is_assistants_root {
        settings.default_assistant_layout_strategy_id.clone()
    } else {
        settings.default_layout_strategy_id.clone()
    }
}

/// Applies `lookup` to every data-bound box's intrinsic size, before the
/// visual tree is built. Must run before
/// `Tree::build`: `orgchart_box_tree::NodeLayoutInfo::fresh` snapshots a
/// box's size at node-allocation time, so a lookup applied afterward would
/// have no effect on the tree that is about to be laid out.
fn apply_size_lookup(container: &mut BoxContainer, lookup: &dyn Fn(&str) -> Option<Size>) {
    let data_bound: Vec<BoxId> = container
    .iter()
    .filter_map(|(id, b)| b.data_id().map(|_| *id))
    .collect();
    for box_id in data_bound {
        let Some(data_id) = container.get(box_id).and_then(|b| b.data_id().map(str::to_string)) else {
            continue;
        };
        if let Some(size) = lookup(&data_id)
            && let Some(b) = container.get_mut(box_id)
        {
            b.set_size(size);
        }
    }
}

fn build_index(tree: &Tree, root: NodeId) -> HashMap<BoxId, NodeId> {
    let mut index = HashMap::new();
    tree.child_first(root, &mut |tree, id| {
        index.insert(tree.box_id_of(id), id);
        true
    });
    index
}

/// The smallest rect enclosing every non-special, layout-affecting box in
/// the tree.
#[must_use]
pub(crate) fn compute_branch_visual_bounding_rect(tree: &Tree, container: &BoxContainer, root: NodeId) -> Rect {
    let mut exterior: Option<Rect> = None;
    tree.child_first(root, &mut |tree, id| {
        if tree.affects_layout(id, container) && !tree.is_special(id, container) {
            let rect = tree.layout_info(id).rect();
            exterior = Some(exterior.map_or(rect, |e| e + rect));
        }
        true
    });
    exterior.unwrap_or(Rect::new(Point::ZERO, Size::ZERO))
}
