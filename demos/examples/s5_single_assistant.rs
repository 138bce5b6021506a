// Copyright 2026 the OrgChart Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! S5: a node with one assistant child and no regular children
//! gets a `FishboneAssistants` carrier-protector spacer, since there is no
//! regular-children carrier to reuse.
//!
//! Run: `cargo run -p orgchart_demos --example s5_single_assistant`

use orgchart_demos::{base_settings, init_tracing, CHILD_SIZE};
use orgchart_layout::{OrgBox, BoxContainer, LayoutAlgorithm, SYSTEM_ROOT_ID};

fn main() {
    init_tracing();

    // The system root (level 0) has no grandparent, so an assistant
    // attached to it directly becomes a regular child. Model the scenario
    // one level down, on a node that has a grandparent (the system root)
    // and owns the assistant.
    let mut container = BoxContainer::new();
    container.get_mut(SYSTEM_ROOT_ID).unwrap().set_size(CHILD_SIZE);
    let mid = container.allocate_id();
    container.insert(OrgBox::new(mid, SYSTEM_ROOT_ID, CHILD_SIZE));

    let assistant = container.allocate_id();
    let mut assistant_box = OrgBox::new(assistant, mid, CHILD_SIZE);
    assistant_box.set_is_assistant(true);
    container.insert(assistant_box);

    let settings = base_settings();
    let mut algo = LayoutAlgorithm::new(&settings);
    let result = algo.apply(&container).expect("single-assistant layout never faults");

    println!("mid: {:?}", result.rect(mid).unwrap());
    println!("assistant: {:?}", result.rect(assistant).unwrap());
    let specials = result.container().iter().filter(|(_, b)| b.is_special()).count();
    println!("synthetic spacer boxes: {specials}");
}
