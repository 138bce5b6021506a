// Copyright 2026 the OrgChart Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`BoxFlags`]: the mutable flag set on a [`crate::Box`].

bitflags::bitflags! {
    /// Flags carried by a [`crate::Box`].
    ///
    /// Modeled as a bitflags set the way `understory_box_tree::NodeFlags`
    /// models visibility/picking, since these four booleans are queried
    /// together constantly (every boundary merge checks
    /// `AFFECTS_LAYOUT & !SPECIAL`) and a bitflags set makes that a single
    /// word compare instead of four field reads.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct BoxFlags: u8 {
        /// Synthetic box injected by a strategy to reserve connector space.
        /// Never user-visible; excluded from the visual bounding rect.
        const SPECIAL = 0b0000_0001;
        /// Node is collapsed: its children are not laid out or connected.
        const COLLAPSED = 0b0000_0010;
        /// Node is an assistant, hanging off its owner's `assistants_root`.
        const IS_ASSISTANT = 0b0000_0100;
        /// Node participates in layout (computed top-down from ancestor
        /// collapse state; invariant 6). Not meant to be set
        /// directly by callers — see [`crate::Tree::propagate_affects_layout`].
        const AFFECTS_LAYOUT = 0b0000_1000;
    }
}

impl BoxFlags {
    /// Whether this box should contribute to boundary/bounding-rect
    /// computations: it affects layout and is not a spacer.
    #[must_use]
    pub fn contributes_to_boundary(self) -> bool {
        self.contains(BoxFlags::AFFECTS_LAYOUT) && !self.contains(BoxFlags::SPECIAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_and_affects_layout_excludes_from_boundary() {
        let f = BoxFlags::SPECIAL | BoxFlags::AFFECTS_LAYOUT;
        assert!(!f.contributes_to_boundary());
        let plain = BoxFlags::AFFECTS_LAYOUT;
        assert!(plain.contributes_to_boundary());
    }
}
