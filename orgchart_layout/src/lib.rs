// Copyright 2026 the OrgChart Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! OrgChart Layout: the `apply()` driver that turns a
//! [`orgchart_box_tree::BoxContainer`] into placed geometry.
//!
//! - [`LayoutAlgorithm`]: strategy selection, visibility propagation, the
//! two-pass (vertical, horizontal) recursion, connector routing.
//! - [`DiagramLayoutSettings`]: pure, immutable-during-`apply` configuration
//!.
//! - [`ingestion`]: the `DataSource` collaborator contract and
//! `build_container`, for converting an external data source's ids into
//! a fresh [`orgchart_box_tree::BoxContainer`].
//! - [`LayoutResult`]: the placed geometry read out of a completed run.
//! - [`LayoutError`]: every fault class `apply()` can raise.
//!
//! This is the facade crate: a host application depends on
//! `orgchart_layout` alone and re-exports from the lower layers
//! (`orgchart_geometry`, `orgchart_box_tree`, `orgchart_layout_state`,
//! `orgchart_layout_strategy`) as needed, the way `understory_responder`
//! wires the rest of its workspace together behind one dependency.

mod algorithm;
mod error;
pub mod ingestion;
mod result;
mod settings;

pub use algorithm::LayoutAlgorithm;
pub use error::LayoutError;
pub use ingestion::{build_container, DataSource};
pub use result::LayoutResult;
pub use settings::DiagramLayoutSettings;

pub use orgchart_box_tree::{Box as OrgBox, BoxContainer, BoxId, BoxTreeError, NodeId, SYSTEM_ROOT_ID};
pub use orgchart_geometry::{edge, edge_is_axis_aligned, is_equal, Dimensions, Edge, Point, Rect, Size};
pub use orgchart_layout_state::{LayoutObserver, LayoutStateError, Operation};
pub use orgchart_layout_strategy::{LayoutStrategy, ParentAlignment, StrategyError, Tunables};
