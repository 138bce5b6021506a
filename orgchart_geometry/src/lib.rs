// Copyright 2026 the OrgChart Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! OrgChart Geometry: the 2-D primitives the layout kernel is built from.
//!
//! - [`Point`] and [`Size`] are re-exports of [`kurbo`]'s types, so callers
//! that already depend on `kurbo` (as most of the Understory/Linebender
//! ecosystem does) get the same types for free.
//! - [`Rect`] is bespoke: the layout kernel always reasons about rectangles
//! as a `top_left` point plus a `size`, never as the `(x0, y0, x1, y1)`
//! corner pair `kurbo::Rect` uses, so a thin wrapper carries the contract
//! the layout strategies actually need (`left`/`right`/`center_h`/`move_h`
//! and smallest-enclosing-rect addition).
//! - [`Dimensions`] is a 1-D span (`from..=to`) used for vertical bands
//! ([`crate::Rect`] projected onto one axis) and has its own union/merge
//! arithmetic.
//! - [`Edge`] is a re-export of `kurbo::Line`: a connector segment is
//! nothing more than a line segment with axis-aligned endpoints.
//! - [`is_equal`] is the epsilon comparison every boundary/alignment
//! computation in the kernel relies on to avoid flip-flopping on
//! floating-point noise.
//!
//! This crate has no knowledge of boxes, trees, or layout strategies; it is
//! the leaf of the workspace's dependency graph (see `orgchart_box_tree` for
//! the next layer up).

mod dimensions;
mod epsilon;
mod rect;

pub use dimensions::Dimensions;
pub use epsilon::is_equal;
pub use rect::Rect;

/// A 2-D point, re-exported from `kurbo`.
pub type Point = kurbo::Point;

/// A 2-D extent (width/height), re-exported from `kurbo`.
pub type Size = kurbo::Size;

/// An axis-aligned connector segment: `from` and `to` share an `x` or a `y`.
///
/// Re-exported from `kurbo::Line`, which is exactly a `{p0, p1}` segment.
pub type Edge = kurbo::Line;

/// Builds an [`Edge`] from two points, matching the field names spec code
/// reads most naturally (`from`/`to`) rather than kurbo's `p0`/`p1`.
#[must_use]
pub fn edge(from: Point, to: Point) -> Edge {
    Edge::new(from, to)
}

/// Returns whether an [`Edge`] is axis-aligned, i.e. its endpoints share an
/// `x` or a `y` coordinate (within [`is_equal`]'s tolerance).
#[must_use]
pub fn edge_is_axis_aligned(e: &Edge) -> bool {
    is_equal(e.p0.x, e.p1.x) || is_equal(e.p0.y, e.p1.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_axis_alignment() {
        let horizontal = edge(Point::new(0.0, 10.0), Point::new(20.0, 10.0));
        let vertical = edge(Point::new(5.0, 0.0), Point::new(5.0, 30.0));
        let diagonal = edge(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        assert!(edge_is_axis_aligned(&horizontal));
        assert!(edge_is_axis_aligned(&vertical));
        assert!(!edge_is_axis_aligned(&diagonal));
    }
}
