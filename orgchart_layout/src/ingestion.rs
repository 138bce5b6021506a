// Copyright 2026 the OrgChart Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ingestion: converting an external data source into a
//! [`orgchart_box_tree::BoxContainer`].
//!
//! The data source itself (a database, a view model, …) is out of scope,
//! treated as an external collaborator, contract only. This
//! module is the contract: implement [`DataSource`] over whatever backs
//! the real data, and [`build_container`] does the id-minting and
//! system-root attachment.

use std::collections::HashMap;
use std::hash::Hash;

use orgchart_box_tree::{Box as OrgBox, BoxContainer, BoxId, SYSTEM_ROOT_ID};
use orgchart_geometry::Size;

/// An external data source offering box identities, parent links, and
/// assistant flags.
///
/// `Id` is whatever key the data source already uses (a database row id, a
/// view-model handle, …); [`build_container`] mints a fresh monotonic
/// [`BoxId`] per `Id` and records the original via
/// [`orgchart_box_tree::Box::data_id`] (stringified with `Display`).
pub trait DataSource {
    /// The data source's own identity type.
    type Id: Clone + Eq + Hash + std::fmt::Display;

    /// Every data item's id, in the order boxes should be minted (ids are
    /// assigned monotonically in this order, so it also determines
    /// [`orgchart_box_tree::BoxContainer::iter`]'s traversal order).
    fn ids(&self) -> Vec<Self::Id>;

    /// `id`'s parent, or `None` if it is a data-level root (attaches
    /// directly under the synthetic [`SYSTEM_ROOT_ID`]).
    fn parent_key_of(&self, id: &Self::Id) -> Option<Self::Id>;

    /// Whether `id`'s data item is flagged as an assistant.
    fn is_assistant(&self, id: &Self::Id) -> bool;
}

/// Builds a [`BoxContainer`] from `source` : mints one
/// monotonic [`BoxId`] per data id, attaches each under its mapped parent
/// (or the system root, for a data-level root), and carries the
/// `is_assistant` flag through.
///
/// Intrinsic sizes are left at [`Size::ZERO`] — install a size lookup on
/// [`crate::LayoutAlgorithm`] to resolve them from `data_id` during
/// `apply`.
#[must_use]
pub fn build_container<D: DataSource>(source: &D) -> BoxContainer {
    let mut container = BoxContainer::new();
    let mut id_map: HashMap<D::Id, BoxId> = HashMap::new();

    for data_id in source.ids() {
        let box_id = container.allocate_id();
        id_map.insert(data_id, box_id);
    }

    for data_id in source.ids() {
        let box_id = id_map[&data_id];
        let parent_box_id = source
        .parent_key_of(&data_id)
        .and_then(|parent| id_map.get(&parent).copied())
        .unwrap_or(SYSTEM_ROOT_ID);

        let mut b = OrgBox::new(box_id, parent_box_id, Size::ZERO);
        b.set_data_id(data_id.to_string());
        if source.is_assistant(&data_id) {
            b.set_is_assistant(true);
        }
        container.insert(b);
    }

    container
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Org {
        rows: Vec<(u32, Option<u32>, bool)>,
    }

    impl DataSource for Org {
        type Id = u32;

        fn ids(&self) -> Vec<u32> {
            self.rows.iter().map(|(id,..)| *id).collect()
        }

        fn parent_key_of(&self, id: &u32) -> Option<u32> {
            self.rows.iter().find(|(i,..)| i == id).and_then(|(_, p, _)| *p)
        }

        fn is_assistant(&self, id: &u32) -> bool {
            self.rows.iter().find(|(i,..)| i == id).is_some_and(|(_, _, a)| *a)
        }
    }

    #[test]
    fn data_roots_attach_under_system_root() {
        let source = Org {
            rows: vec![(1, None, false), (2, Some(1), false), (3, Some(1), true)],
        };
        let container = build_container(&source);
        // 1 system root + 3 data boxes.
        assert_eq!(container.len(), 4);
    }
}
