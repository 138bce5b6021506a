// Copyright 2026 the OrgChart Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`DiagramLayoutSettings`]: pure configuration, immutable during `apply`
//!.

use std::collections::HashMap;

use orgchart_layout_strategy::LayoutStrategy;

/// Diagram-wide layout configuration.
///
/// Cheaply `Clone`-able, plain data — immutable for the duration of one
/// `apply()` run, with
/// [`orgchart_layout_state::LayoutState`] the only mutable carrier. Per-box
/// overrides (`layout_strategy_id`/`assistant_layout_strategy_id`) live on
/// [`orgchart_box_tree::Box`] itself, not here — see
/// [`crate::LayoutAlgorithm`]'s strategy-resolution walk.
#[derive(Clone, Debug)]
pub struct DiagramLayoutSettings {
    /// Every strategy a box's `layout_strategy_id`/`assistant_layout_strategy_id`
    /// override (or the defaults below) may resolve to, keyed by id.
    pub layout_strategies: HashMap<String, LayoutStrategy>,
    /// The strategy id used for a regular node with no ancestor override.
    pub default_layout_strategy_id: String,
    /// The strategy id used for an `assistants_root` with no ancestor
    /// override.
    pub default_assistant_layout_strategy_id: String,
    /// Spacing between sibling branches at the top level (diagram-wide
    /// default; strategies carry their own `sibling_spacing` tunable for
    /// the common case, this is available for a host UI that wants an
    /// outer margin distinct from in-tree sibling spacing).
    pub branch_spacing: f64,
    /// Extra vertical margin added around every box's intrinsic size
    /// before layout (a host UI convenience knob; `0.0` keeps sizes exactly
    /// as given).
    pub box_vertical_margin: f64,
}

impl DiagramLayoutSettings {
    /// A settings value with no strategies registered and the default ids
    /// set to `"default"`/`"default_assistants"`. Callers must insert
    /// matching entries into `layout_strategies` before calling
    /// [`crate::LayoutAlgorithm::apply`] — see
    /// [`LayoutError::DefaultStrategyMissing`](crate::LayoutError::DefaultStrategyMissing).
    #[must_use]
    pub fn new() -> Self {
        Self {
            layout_strategies: HashMap::new(),
            default_layout_strategy_id: "default".to_string(),
            default_assistant_layout_strategy_id: "default_assistants".to_string(),
            branch_spacing: 0.0,
            box_vertical_margin: 0.0,
        }
    }
}

impl Default for DiagramLayoutSettings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_settings_has_no_strategies_registered() {
        let settings = DiagramLayoutSettings::new();
        assert!(settings.layout_strategies.is_empty());
        assert_eq!(settings.default_layout_strategy_id, "default");
    }
}
