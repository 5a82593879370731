//! Neighbor index arithmetic for bounded and looping sequences.
//!
//! Every function here is pure and O(1). "No neighbor" is reported as `None` and callers treat
//! it as "edge reached": the requested navigation becomes a no-op.

use crate::{Direction, IndexingMode};

/// Returns the index `step` positions after `current`.
///
/// - `Bounded`: `None` when the target falls outside `[0, count)`.
/// - `Looping`: wraps modulo `count`; `None` when `count <= 1` or the wrapped target is
///   `current` itself (callers must not request `step >= count`).
pub fn next_index(mode: IndexingMode, count: usize, current: usize, step: usize) -> Option<usize> {
    match mode {
        IndexingMode::Bounded => current.checked_add(step).filter(|&i| i < count),
        IndexingMode::Looping => {
            if count <= 1 {
                return None;
            }
            let current = current % count;
            let target = (current + step % count) % count;
            (target != current).then_some(target)
        }
    }
}

/// Returns the index `step` positions before `current`.
///
/// Mirrors [`next_index`] in the opposite direction.
pub fn previous_index(
    mode: IndexingMode,
    count: usize,
    current: usize,
    step: usize,
) -> Option<usize> {
    match mode {
        IndexingMode::Bounded => current.checked_sub(step).filter(|&i| i < count),
        IndexingMode::Looping => {
            if count <= 1 {
                return None;
            }
            let current = current % count;
            let target = (current + count - step % count) % count;
            (target != current).then_some(target)
        }
    }
}

/// Returns the item that becomes current when navigating one step towards `direction`.
///
/// `Left` reveals the previous item and `Right` the next one.
pub fn neighbor_index(
    mode: IndexingMode,
    count: usize,
    current: usize,
    direction: Direction,
) -> Option<usize> {
    match direction {
        Direction::Left => previous_index(mode, count, current, 1),
        Direction::Right => next_index(mode, count, current, 1),
    }
}
