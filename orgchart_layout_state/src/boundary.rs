// Copyright 2026 the OrgChart Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`Boundary`]: the per-subtree left/right envelope.

use orgchart_box_tree::{BoxContainer, NodeId, Tree};
use orgchart_geometry::{Dimensions, Rect};

/// One row of a [`Boundary`]'s envelope: the leftmost/rightmost `x` reached
/// by anything merged whose vertical span intersects `y`.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Segment {
    y: Dimensions,
    left: f64,
    right: f64,
}

/// The outermost left/right `x` as a function of `y`, for one subtree.
///
/// Strategies compare a candidate subtree's own boundary against the
/// boundary accumulated from previously-placed siblings to find the
/// smallest horizontal shift that avoids a collision — that comparison,
/// [`Boundary::min_offset_to_clear`], is the primitive calls
/// out as what makes sibling placement `O(N)` per level instead of needing
/// pairwise rect intersection tests.
#[derive(Clone, Debug, Default)]
pub struct Boundary {
    segments: Vec<Segment>,
}

impl Boundary {
    /// An empty boundary (no rect has been merged yet).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the boundary back to empty, for reuse from the pool.
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Whether any rect has been merged into this boundary.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Extends the envelope with `rect`.
    pub fn merge(&mut self, rect: Rect) {
        self.segments.push(Segment {
            y: rect.v_span(),
            left: rect.left(),
            right: rect.right(),
        });
    }

    /// Unions another boundary's rows into this one.
    pub fn merge_from(&mut self, other: &Boundary) {
        self.segments.extend_from_slice(&other.segments);
    }

    /// Clears this boundary, then re-merges every `affects_layout &&
    /// !is_special` node's placed rect under `root`, in depth-first
    /// (child-first) order.
    pub fn reload_from_branch(&mut self, tree: &Tree, container: &BoxContainer, root: NodeId) {
        self.clear();
        tree.child_first(root, &mut |t, id| {
            if t.affects_layout(id, container) && !t.is_special(id, container) {
                self.merge(t.layout_info(id).rect());
            }
            true
        });
    }

    /// The smallest non-negative horizontal shift `dx` such that
    /// translating `candidate` by `dx` clears `self` with at least
    /// `spacing` between them, for every `y` where the two overlap.
    ///
    /// Returns `0.0` if `candidate` already clears `self` everywhere (or if
    /// either boundary is empty).
    #[must_use]
    pub fn min_offset_to_clear(&self, candidate: &Boundary, spacing: f64) -> f64 {
        let mut offset = 0.0_f64;
        for a in &self.segments {
            for b in &candidate.segments {
                if y_overlaps(a.y, b.y) {
                    let required = a.right + spacing - b.left;
                    if required > offset {
                        offset = required;
                    }
                }
            }
        }
        offset
    }

    /// The enclosing rect of every row merged into this boundary, or `None`
    /// if empty.
    #[must_use]
    pub fn bounding_rect(&self) -> Option<Rect> {
        let mut iter = self.segments.iter();
        let first = iter.next()?;
        let mut left = first.left;
        let mut right = first.right;
        let mut top = first.y.from;
        let mut bottom = first.y.to;
        for seg in iter {
            left = left.min(seg.left);
            right = right.max(seg.right);
            top = top.min(seg.y.from);
            bottom = bottom.max(seg.y.to);
        }
        Some(Rect::new(
            orgchart_geometry::Point::new(left, top),
            orgchart_geometry::Size::new(right - left, bottom - top),
        ))
    }
}

fn y_overlaps(a: Dimensions, b: Dimensions) -> bool {
    a.from <= b.to && b.from <= a.to
}

#[cfg(test)]
mod tests {
    use super::*;
    use orgchart_geometry::{Point, Size};

    #[test]
    fn merge_grows_bounding_rect() {
        let mut b = Boundary::new();
        assert!(b.bounding_rect().is_none());
        b.merge(Rect::new(Point::new(0.0, 0.0), Size::new(10.0, 10.0)));
        b.merge(Rect::new(Point::new(20.0, 5.0), Size::new(10.0, 10.0)));
        let r = b.bounding_rect().unwrap();
        assert_eq!(r.left(), 0.0);
        assert_eq!(r.right(), 30.0);
        assert_eq!(r.top(), 0.0);
        assert_eq!(r.bottom(), 15.0);
    }

    #[test]
    fn min_offset_to_clear_respects_spacing() {
        let mut placed = Boundary::new();
        placed.merge(Rect::new(Point::new(0.0, 0.0), Size::new(40.0, 20.0)));

        let mut candidate = Boundary::new();
        candidate.merge(Rect::new(Point::new(10.0, 5.0), Size::new(40.0, 20.0)));

        // placed right edge = 40, candidate left = 10, spacing 5 => need dx = 35.
        let dx = placed.min_offset_to_clear(&candidate, 5.0);
        assert_eq!(dx, 35.0);
    }

    #[test]
    fn min_offset_to_clear_is_zero_when_disjoint_in_y() {
        let mut placed = Boundary::new();
        placed.merge(Rect::new(Point::new(0.0, 0.0), Size::new(40.0, 20.0)));

        let mut candidate = Boundary::new();
        candidate.merge(Rect::new(Point::new(10.0, 100.0), Size::new(40.0, 20.0)));

        assert_eq!(placed.min_offset_to_clear(&candidate, 5.0), 0.0);
    }
}
