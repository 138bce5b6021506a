// Copyright 2026 the OrgChart Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `MultiLineFishbone` group iterator : how `n`
//! children are distributed across `g` vertical groups, row by row.

/// One group's share of `n` children distributed across `g` groups
///.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupSpan {
    /// The index, in the original child list, of this group's first
    /// child (row 0's left-column slot).
    pub from_index: usize,
    /// Total children assigned to this group (left pillar + right pillar).
    pub count: usize,
    /// `ceil(count / 2)`: how many of `count` sit in the left pillar.
    pub max_on_left: usize,
}

/// Children are distributed row by row, each row holding up to `2 * g`
/// children: row `r` occupies original indices `[r*2g, r*2g + 2g)`, and
/// within a row, group `k` owns the pair at offsets `2k` (left) and
/// `2k + 1` (right). A group therefore receives two children per full row
/// it appears in, plus at most one trailing child from a final partial row
///.
///
/// Returns the original-list indices of group `k`'s left pillar and right
/// pillar (each already in row order, i.e. top-to-bottom placement order).
#[must_use]
pub fn group_pillars(n: usize, g: usize, k: usize) -> (Vec<usize>, Vec<usize>) {
    assert!(g >= 1, "group count must be at least 1");
    let row_width = 2 * g;
    let mut left = Vec::new();
    let mut right = Vec::new();
    let mut row = 0_usize;
    loop {
        let left_idx = row * row_width + 2 * k;
        if left_idx >= n {
            break;
        }
        left.push(left_idx);
        let right_idx = left_idx + 1;
        if right_idx < n {
            right.push(right_idx);
        }
        row += 1;
    }
    (left, right)
}

/// The span summary for group `k` : derived from
/// [`group_pillars`] rather than a separate closed-form, so the two can
/// never disagree.
#[must_use]
pub fn group_span(n: usize, g: usize, k: usize) -> GroupSpan {
    let (left, right) = group_pillars(n, g, k);
    let count = left.len() + right.len();
    GroupSpan {
        from_index: 2 * k,
        count,
        max_on_left: count.div_ceil(2),
    }
}

/// Every group's span, for `k` in `0..g`, in group-index order.
#[must_use]
pub fn all_group_spans(n: usize, g: usize) -> Vec<GroupSpan> {
    (0..g).map(|k| group_span(n, g, k)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s4_four_children_one_group_splits_even_odd() {
        // S4: 4 children, max_groups=1 -> left pillar {0,2}, right {1,3}.
        let (left, right) = group_pillars(4, 1, 0);
        assert_eq!(left, vec![0, 2]);
        assert_eq!(right, vec![1, 3]);
    }

    #[test]
    fn every_child_assigned_to_exactly_one_group() {
        let n = 11;
        let g = 3;
        let mut seen = vec![false; n];
        for k in 0..g {
            let (left, right) = group_pillars(n, g, k);
            for idx in left.into_iter().chain(right) {
                assert!(!seen[idx], "index {idx} assigned twice");
                seen[idx] = true;
            }
        }
        assert!(seen.iter().all(|&b| b), "every child must be assigned");
    }

    #[test]
    fn counts_match_full_rows_plus_partial_row_rule() {
        // n=11, g=3 -> row_width=6. full_rows = 11/6 = 1, remainder = 5.
        // group 0: remainder(5) >= 2*0+2=2 -> +2 => count = 2 + 2 = 4
        // group 1: remainder(5) >= 2*1+2=4 -> +2 => count = 2 + 2 = 4
        // group 2: remainder(5) >= 2*2+2=6? no; >= 2*2+1=5? yes -> +1 => count = 2 + 1 = 3
        let spans = all_group_spans(11, 3);
        assert_eq!(spans[0].count, 4);
        assert_eq!(spans[1].count, 4);
        assert_eq!(spans[2].count, 3);
        assert_eq!(spans.iter().map(|s| s.count).sum::<usize>(), 11);
    }

    #[test]
    fn max_on_left_is_ceil_half_of_count() {
        let span = group_span(5, 1, 0);
        assert_eq!(span.count, 5);
        assert_eq!(span.max_on_left, 3);
    }
}
