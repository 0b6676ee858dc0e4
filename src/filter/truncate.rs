//! Head/tail line bounding
//!
//! Tail is applied first, then head is taken from what tail left:
//! `tail = 5, head = 3` on `a..g` keeps `c d e`. The order is fixed.

use super::{join_lines, split_lines};

/// Bound `input` to the first `head` of its last `tail` lines
///
/// A bound of 0, or one at or above the remaining line count, is a no-op.
/// One trailing terminator does not count as an extra empty line, and the
/// result carries no trailing terminator.
pub fn apply_head_tail(input: &[u8], head: usize, tail: usize) -> Vec<u8> {
    let mut lines = split_lines(input);
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    let mut kept: &[&[u8]] = &lines;
    if tail > 0 && tail < kept.len() {
        kept = &kept[kept.len() - tail..];
    }
    if head > 0 && head < kept.len() {
        kept = &kept[..head];
    }

    trace!(total = lines.len(), kept = kept.len(), head, tail, "bounded output lines");
    join_lines(kept.iter().copied())
}
