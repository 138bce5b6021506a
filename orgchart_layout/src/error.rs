// Copyright 2026 the OrgChart Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`LayoutError`]: every fault class `apply()` can raise.

use orgchart_box_tree::BoxTreeError;
use orgchart_layout_state::LayoutStateError;
use orgchart_layout_strategy::StrategyError;

/// Every fault [`crate::LayoutAlgorithm::apply`] can raise.
///
/// Every variant here is a programmer/configuration error: a
/// fault aborts the whole `apply()` call, there is no retry and no partial
/// progress. The narrower `thiserror` enums from `orgchart_box_tree` and
/// `orgchart_layout_state` are wrapped here via `#[from]` rather than
/// re-declared, the same layering `orgchart_layout_strategy::StrategyError`
/// already uses relative to its own crate.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// A fault building the visual tree from the `BoxContainer` (missing
    /// system root, multiple roots after attachment).
    #[error(transparent)]
    Tree(#[from] BoxTreeError),
    /// A fault in the layout-level stack/boundary pool bookkeeping.
    #[error(transparent)]
    State(#[from] LayoutStateError),
    /// A fault in a strategy's own configuration (alignment/`max_groups`).
    #[error(transparent)]
    Strategy(#[from] StrategyError),
    /// `default_layout_strategy_id` does not name a registered strategy.
    #[error("default layout strategy {0:?} is not registered in layout_strategies")]
    DefaultStrategyMissing(String),
    /// `default_assistant_layout_strategy_id` does not name a registered
    /// strategy.
    #[error("default assistant layout strategy {0:?} is not registered in layout_strategies")]
    DefaultAssistantStrategyMissing(String),
    /// A resolved (inherited or default) strategy id does not name a
    /// registered strategy.
    #[error("layout strategy {0:?} is not registered in layout_strategies")]
    StrategyMissing(String),
}
