// Copyright 2026 the OrgChart Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! S3: four children stacked vertically under `SingleColumn`
//! Left, with one vertical-carrier spacer spanning the whole stack.
//!
//! Run: `cargo run -p orgchart_demos --example s3_four_children_single_column`

use orgchart_demos::{base_settings, init_tracing, CHILD_SIZE};
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

    let settings = base_settings();
    let mut algo = LayoutAlgorithm::new(&settings);
    let result = algo.apply(&container).expect("single-column stack never faults");

    for child in children {
        println!("child {child:?}: {:?}", result.rect(child).unwrap());
    }
    println!("bounding rect: {:?}", result.bounding_rect());
}
