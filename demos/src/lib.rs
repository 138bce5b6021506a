// Copyright 2026 the OrgChart Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared scaffolding for the scenario demos in this crate's own
//! `examples/` directory. Not part of the public crate API — `orgchart_layout`
//! is that; this crate only exists to give the scenarios a runnable home.

use std::collections::HashMap;

use orgchart_layout::{DiagramLayoutSettings, LayoutStrategy, ParentAlignment, Size, Tunables};

/// Box size shared by every demo.
pub const CHILD_SIZE: Size = Size::new(40.0, 20.0);

/// Settings matching the default worked tunables: `SingleColumn` Left as
/// the default, `FishboneAssistants` Center as the assistants default.
#[must_use]
pub fn base_settings() -> DiagramLayoutSettings {
    let mut strategies = HashMap::new();
    strategies.insert("default".to_string(), LayoutStrategy::SingleColumn { tunables: Tunables::default() });
    strategies.insert(
        "default_assistants".to_string(),
        LayoutStrategy::FishboneAssistants { tunables: Tunables { parent_alignment: ParentAlignment::Center,..Tunables::default() } },
    );
    DiagramLayoutSettings {
        layout_strategies: strategies,
        default_layout_strategy_id: "default".to_string(),
        default_assistant_layout_strategy_id: "default_assistants".to_string(),
        ..DiagramLayoutSettings::new()
    }
}

/// Installs a `fishbone1` strategy id (`MultiLineFishbone`, `max_groups=1`,
/// Center) into `settings`, for the demos that exercise the fishbone path.
pub fn with_single_group_fishbone(mut settings: DiagramLayoutSettings) -> DiagramLayoutSettings {
    settings.layout_strategies.insert(
        "fishbone1".to_string(),
        LayoutStrategy::MultiLineFishbone {
            tunables: Tunables { parent_alignment: ParentAlignment::Center,..Tunables::default() },
            max_groups: 1,
        },
    );
    settings
}

/// Installs `tracing-subscriber`'s env-filter/fmt layer, so `RUST_LOG=debug`
/// surfaces the phase transitions `LayoutAlgorithm::apply` emits.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()).try_init();
}
