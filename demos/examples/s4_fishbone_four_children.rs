// Copyright 2026 the OrgChart Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! S4: four children under `MultiLineFishbone` with
//! `max_groups=1`, Center alignment — two pillars hanging off a single
//! vertical carrier, children 0/2 left and 1/3 right.
//!
//! Run: `cargo run -p orgchart_demos --example s4_fishbone_four_children`

use orgchart_demos::{base_settings, init_tracing, with_single_group_fishbone, CHILD_SIZE};
use orgchart_layout::{OrgBox, BoxContainer, LayoutAlgorithm, SYSTEM_ROOT_ID};

fn main() {
    init_tracing();

    let mut container = BoxContainer::new();
    container.get_mut(SYSTEM_ROOT_ID).unwrap().set_size(CHILD_SIZE);
    let children: Vec<_> = (0..4)
        .map(|_| {
            let id = container.allocate_id();
            container.insert(OrgBox::new(id, SYSTEM_ROOT_ID, CHILD_SIZE));
            id
        })
        .collect();
    container.get_mut(SYSTEM_ROOT_ID).unwrap().set_layout_strategy_id("fishbone1");

    let settings = with_single_group_fishbone(base_settings());
    let mut algo = LayoutAlgorithm::new(&settings);
    let result = algo.apply(&container).expect("single-group fishbone never faults");

    for (i, child) in children.iter().enumerate() {
        println!("child {i}: {:?}", result.rect(*child).unwrap());
    }
    println!("connector: {:?}", result.connector(SYSTEM_ROOT_ID).unwrap());
}
