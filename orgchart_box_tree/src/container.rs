// Copyright 2026 the OrgChart Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`BoxContainer`]: the `id -> Box` map with a mandatory system root.

use std::collections::BTreeMap;

use orgchart_geometry::Size;

use crate::box_model::Box;
use crate::ids::BoxId;

/// The conventional id reserved for the synthetic system root.
pub const SYSTEM_ROOT_ID: BoxId = BoxId::new(1);

/// A mapping of [`BoxId`] to [`Box`], with exactly one designated
/// `system_root` whose `parent_id` is [`BoxId::NONE`].
///
/// This is the landing spot for an out-of-scope "data source" collaborator:
/// ingestion code builds one of these from whatever backs the real data
/// (database rows, a view model, …) and hands it to
/// `orgchart_layout::LayoutAlgorithm::apply`.
#[derive(Clone, Debug, Default)]
pub struct BoxContainer {
    boxes: BTreeMap<BoxId, Box>,
    system_root: Option<BoxId>,
    next_synthetic_id: i64,
}

impl BoxContainer {
    /// Builds an empty container and inserts the system root box
    /// ([`SYSTEM_ROOT_ID`]).
    #[must_use]
    pub fn new() -> Self {
        let mut c = Self {
            boxes: BTreeMap::new(),
            system_root: None,
            next_synthetic_id: SYSTEM_ROOT_ID.raw() + 1,
        };
        let root = Box::new(SYSTEM_ROOT_ID, BoxId::NONE, Size::ZERO);
        c.boxes.insert(SYSTEM_ROOT_ID, root);
        c.system_root = Some(SYSTEM_ROOT_ID);
        c
    }

    /// The system root's id.
    #[must_use]
    pub fn system_root(&self) -> Option<BoxId> {
        self.system_root
    }

    /// Inserts a box, keyed by its own id. Overwrites any existing box with
    /// the same id.
    pub fn insert(&mut self, b: Box) -> BoxId {
        let id = b.id();
        self.boxes.insert(id, b);
        id
    }

    /// Allocates a fresh synthetic id, guaranteed not to collide with any
    /// id already present (used by strategies to mint spacer boxes).
    pub fn allocate_id(&mut self) -> BoxId {
        loop {
            let candidate = BoxId::new(self.next_synthetic_id);
            self.next_synthetic_id += 1;
            if !self.boxes.contains_key(&candidate) {
                return candidate;
            }
        }
    }

    /// Looks up a box by id.
    #[must_use]
    pub fn get(&self, id: BoxId) -> Option<&Box> {
        self.boxes.get(&id)
    }

    /// Looks up a box mutably by id.
    pub fn get_mut(&mut self, id: BoxId) -> Option<&mut Box> {
        self.boxes.get_mut(&id)
    }

    /// Iterates all boxes, in ascending id order (ids are allocated
    /// monotonically, so this is also insertion order for ingested data).
    pub fn iter(&self) -> impl Iterator<Item = (&BoxId, &Box)> {
        self.boxes.iter()
    }

    /// The number of boxes in the container.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Whether the container is empty (never true after [`BoxContainer::new`],
    /// since the system root is always present).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_container_has_system_root() {
        let c = BoxContainer::new();
        assert_eq!(c.system_root(), Some(SYSTEM_ROOT_ID));
        assert!(c.get(SYSTEM_ROOT_ID).is_some());
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn allocate_id_never_collides() {
        let mut c = BoxContainer::new();
        let a = c.allocate_id();
        c.insert(Box::new(a, SYSTEM_ROOT_ID, Size::ZERO));
        let b = c.allocate_id();
        assert_ne!(a, b);
    }
}
