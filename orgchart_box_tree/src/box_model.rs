// Copyright 2026 the OrgChart Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`Box`]: identity, parent link, intrinsic size and flags.

use orgchart_geometry::Size;

use crate::flags::BoxFlags;
use crate::ids::BoxId;
use crate::node::StrategyId;

/// A single box: an organizational-chart node's identity and intrinsic
/// geometry, before any layout has run.
///
/// `id`/`parent_id` are immutable once inserted into a [`crate::BoxContainer`];
/// `flags` and `size` are mutable (a UI shell can toggle `is_collapsed`
/// and rerun `apply()`).
#[derive(Clone, Debug)]
pub struct Box {
    id: BoxId,
    parent_id: BoxId,
    /// The external data item this box was created from, if any. Synthetic
    /// (spacer, assistants-root) boxes have no `data_id`.
    data_id: Option<String>,
    flags: BoxFlags,
    /// Intrinsic size, set at construction or via the size callback;
    /// layout never mutates this, only `NodeLayoutInfo::size`.
    size: Size,
    /// Per-box override of the strategy used to arrange this box's regular
    /// children; `None` inherits from the nearest ancestor override, or the
    /// diagram's default.
    layout_strategy_id: Option<StrategyId>,
    /// Per-box override of the strategy used to arrange this box's
    /// assistants; resolved the same way as `layout_strategy_id` but
    /// walked and applied separately.
    assistant_layout_strategy_id: Option<StrategyId>,
}

impl Box {
    /// Builds a regular, data-bound box.
    #[must_use]
    pub fn new(id: BoxId, parent_id: BoxId, size: Size) -> Self {
        Self {
            id,
            parent_id,
            data_id: None,
            flags: BoxFlags::AFFECTS_LAYOUT,
            size,
            layout_strategy_id: None,
            assistant_layout_strategy_id: None,
        }
    }

    /// Builds a synthetic box (a spacer, or an `assistants_root`'s own
    /// placeholder): `is_special = true`, no `data_id`.
    #[must_use]
    pub fn new_special(id: BoxId, parent_id: BoxId, size: Size) -> Self {
        let mut b = Self::new(id, parent_id, size);
        b.flags |= BoxFlags::SPECIAL;
        b
    }

    /// This box's id.
    #[must_use]
    pub fn id(&self) -> BoxId {
        self.id
    }

    /// This box's parent id, or [`BoxId::NONE`] if it has none.
    #[must_use]
    pub fn parent_id(&self) -> BoxId {
        self.parent_id
    }

    /// The external data id this box represents, if any.
    #[must_use]
    pub fn data_id(&self) -> Option<&str> {
        self.data_id.as_deref()
    }

    /// Sets the external data id.
    pub fn set_data_id(&mut self, data_id: impl Into<String>) {
        self.data_id = Some(data_id.into());
    }

    /// This box's current flags.
    #[must_use]
    pub fn flags(&self) -> BoxFlags {
        self.flags
    }

    /// This box's intrinsic size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Sets the intrinsic size (used by the size callback).
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Whether this box is a synthetic spacer.
    #[must_use]
    pub fn is_special(&self) -> bool {
        self.flags.contains(BoxFlags::SPECIAL)
    }

    /// Whether this box is collapsed (its children are not laid out).
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.flags.contains(BoxFlags::COLLAPSED)
    }

    /// Sets whether this box is collapsed.
    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.flags.set(BoxFlags::COLLAPSED, collapsed);
    }

    /// Whether this box is an assistant of its owner.
    #[must_use]
    pub fn is_assistant(&self) -> bool {
        self.flags.contains(BoxFlags::IS_ASSISTANT)
    }

    /// Marks this box as an assistant.
    pub fn set_is_assistant(&mut self, is_assistant: bool) {
        self.flags.set(BoxFlags::IS_ASSISTANT, is_assistant);
    }

    /// Whether this box currently affects layout.
    #[must_use]
    pub fn affects_layout(&self) -> bool {
        self.flags.contains(BoxFlags::AFFECTS_LAYOUT)
    }

    pub(crate) fn set_affects_layout(&mut self, affects: bool) {
        self.flags.set(BoxFlags::AFFECTS_LAYOUT, affects);
    }

    /// This box's own strategy override, if set.
    #[must_use]
    pub fn layout_strategy_id(&self) -> Option<&str> {
        self.layout_strategy_id.as_deref()
    }

    /// Sets this box's own strategy override.
    pub fn set_layout_strategy_id(&mut self, id: impl Into<StrategyId>) {
        self.layout_strategy_id = Some(id.into());
    }

    /// This box's own assistant-strategy override, if set.
    #[must_use]
    pub fn assistant_layout_strategy_id(&self) -> Option<&str> {
        self.assistant_layout_strategy_id.as_deref()
    }

    /// Sets this box's own assistant-strategy override.
    pub fn set_assistant_layout_strategy_id(&mut self, id: impl Into<StrategyId>) {
        self.assistant_layout_strategy_id = Some(id.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_box_has_no_data_id() {
        let b = Box::new_special(BoxId::new(2), BoxId::new(1), Size::new(4.0, 100.0));
        assert!(b.is_special());
        assert!(b.data_id().is_none());
    }

    #[test]
    fn collapsed_toggle_round_trips() {
        let mut b = Box::new(BoxId::new(3), BoxId::NONE, Size::ZERO);
        assert!(!b.is_collapsed());
        b.set_collapsed(true);
        assert!(b.is_collapsed());
    }
}
