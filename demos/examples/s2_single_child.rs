// Copyright 2026 the OrgChart Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! S2: a root with one child under `SingleColumn` Left
//! alignment, showing the one-vertical-carrier + one-horizontal-hook
//! connector shape.
//!
//! Run: `cargo run -p orgchart_demos --example s2_single_child`

use orgchart_demos::{base_settings, init_tracing, CHILD_SIZE};
use orgchart_layout::{OrgBox, BoxContainer, LayoutAlgorithm, SYSTEM_ROOT_ID};

fn main() {
    init_tracing();

    let mut container = BoxContainer::new();
    container.get_mut(SYSTEM_ROOT_ID).unwrap().set_size(CHILD_SIZE);
    let child_id = container.allocate_id();
    container.insert(OrgBox::new(child_id, SYSTEM_ROOT_ID, CHILD_SIZE));

    let settings = base_settings();
    let mut algo = LayoutAlgorithm::new(&settings);
    let result = algo.apply(&container).expect("two-box layout never faults");

    println!("child: {:?}", result.rect(child_id).unwrap());
    println!("connector: {:?}", result.connector(SYSTEM_ROOT_ID).unwrap());
}
