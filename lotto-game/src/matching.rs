//! Counting shared numbers between two ascending sequences.

use std::cmp::Ordering;

/// Count the values two ascending slices have in common.
///
/// Both inputs must be sorted low to high. Repeated values are matched pairwise,
/// so `[2, 2]` against `[2, 2, 2]` counts two.
#[must_use]
pub fn match_count(a: &[u32], b: &[u32]) -> usize {
    debug_assert!(a.is_sorted(), "left input must be ascending");
    debug_assert!(b.is_sorted(), "right input must be ascending");

    let (mut i, mut j, mut matched) = (0, 0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                matched += 1;
                i += 1;
                j += 1;
            }
        }
    }
    matched
}
