// Copyright 2026 the OrgChart Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! OrgChart Layout Strategy: the four pluggable per-node layout algorithms
//! plus the shared machinery they're built from.
//!
//! - [`LayoutStrategy`]: the tagged variant (`SingleColumn`, `Linear`,
//! `MultiLineFishbone`, `FishboneAssistants`) exposing `pre_process`,
//! `apply_vertical_layout`, `apply_horizontal_layout` and
//! `route_connectors`.
//! - [`Tunables`]/[`ParentAlignment`]: the knobs every variant shares.
//! - `group` and `adapter`: the fishbone group iterator and the
//! two-column pillar-placement helper (`SingleFishboneLayoutAdapter`)
//! back `MultiLineFishbone` and `FishboneAssistants`.
//!
//! A strategy never recurses into a child's own layout pass directly — it
//! is handed a [`VerticalRecurse`]/[`HorizontalRecurse`] closure by
//! `orgchart_layout::LayoutAlgorithm`, which pushes/pops the
//! `orgchart_layout_state::LayoutState` level stack and resolves the
//! child's own strategy before calling back in here. Keeping the recursion behind a closure
//! parameter, rather than this crate depending on `orgchart_layout`
//! directly, is what keeps the dependency graph acyclic.

mod adapter;
mod children;
mod error;
mod group;
mod strategy;
mod tunables;

pub use adapter::PillarLayout;
pub use error::StrategyError;
pub use group::{all_group_spans, group_pillars, group_span, GroupSpan};
pub use strategy::LayoutStrategy;
pub use tunables::{ParentAlignment, Tunables};

use orgchart_box_tree::{BoxContainer, NodeId, Tree};
use orgchart_layout_state::LayoutState;

/// The callback a [`LayoutStrategy`] uses to recurse into one child's own
/// vertical layout pass, handed in by the driver (see the crate-level doc
/// comment on re-entrant recursion).
pub type VerticalRecurse<'a> = dyn FnMut(&mut Tree, &mut BoxContainer, &mut LayoutState, NodeId) + 'a;

/// The callback a [`LayoutStrategy`] uses to recurse into one child's own
/// horizontal layout pass, handed in by the driver.
pub type HorizontalRecurse<'a> = dyn FnMut(&mut Tree, &mut BoxContainer, &mut LayoutState, NodeId) + 'a;
