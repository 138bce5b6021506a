// Copyright 2026 the OrgChart Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! S6: a collapsed root keeps its children at their unlaid
//! default positions and emits no connectors; the bounding rect is the
//! root's own rect alone.
//!
//! Run: `cargo run -p orgchart_demos --example s6_collapsed_root`

use orgchart_demos::{base_settings, init_tracing, CHILD_SIZE};
use orgchart_layout::{OrgBox, BoxContainer, LayoutAlgorithm, SYSTEM_ROOT_ID};

fn main() {
    init_tracing();

    let mut container = BoxContainer::new();
    container.get_mut(SYSTEM_ROOT_ID).unwrap().set_size(CHILD_SIZE);
    let children: Vec<_> = (0..3)
        .map(|_| {
            let id = container.allocate_id();
            container.insert(OrgBox::new(id, SYSTEM_ROOT_ID, CHILD_SIZE));
            id
        })
        .collect();
    container.get_mut(SYSTEM_ROOT_ID).unwrap().set_collapsed(true);

    let settings = base_settings();
    let mut algo = LayoutAlgorithm::new(&settings);
    let result = algo.apply(&container).expect("collapsed-root layout never faults");

    for child in children {
        println!("child {child:?} (unlaid): {:?}", result.rect(child).unwrap());
    }
    println!("connector: {:?}", result.connector(SYSTEM_ROOT_ID));
    println!("bounding rect: {:?}", result.bounding_rect());
}
