// Copyright 2026 the OrgChart Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! S1: a system root with no children lays out to its own
//! intrinsic rect, with no connectors and a bounding rect equal to itself.
//!
//! Run: `cargo run -p orgchart_demos --example s1_root_only`

use orgchart_demos::{base_settings, init_tracing, CHILD_SIZE};
use orgchart_layout::{BoxContainer, LayoutAlgorithm, SYSTEM_ROOT_ID};

fn main() {
    init_tracing();

    let mut container = BoxContainer::new();
    container.get_mut(SYSTEM_ROOT_ID).unwrap().set_size(CHILD_SIZE);

    let settings = base_settings();
    let mut algo = LayoutAlgorithm::new(&settings);
    let result = algo.apply(&container).expect("single-root layout never faults");

    let root_rect = result.rect(SYSTEM_ROOT_ID).unwrap();
    println!("root: {root_rect:?}");
    println!("connector: {:?}", result.connector(SYSTEM_ROOT_ID));
    println!("bounding rect: {:?}", result.bounding_rect());
}
