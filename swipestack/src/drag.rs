use crate::cursor;
use crate::{Direction, DragOptions, IndexingMode};

/// The offset and direction produced by a drag update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSample {
    pub offset: f32,
    /// `None` when the offset is exactly zero; the previous direction should be kept.
    pub direction: Option<Direction>,
}

/// Converts raw horizontal drag deltas into a damped, clamped offset.
///
/// Dragging never changes the current index. The tracker also remembers the latest raw delta of
/// the active drag session, so a drag that starts while a transition is running takes effect
/// (with its current, not historical, delta) once the engine is idle again.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragTracker {
    options: DragOptions,
    last_raw_dx: Option<f32>,
}

impl DragTracker {
    /// Creates a tracker. Out-of-range options are sanitized with [`DragOptions::sanitized`].
    pub fn new(options: DragOptions) -> Self {
        Self {
            options: options.sanitized(),
            last_raw_dx: None,
        }
    }

    pub fn options(&self) -> DragOptions {
        self.options
    }

    /// Returns `true` between the first drag update and the drag end.
    pub fn is_active(&self) -> bool {
        self.last_raw_dx.is_some()
    }

    /// The latest raw delta of the active drag session.
    pub fn last_raw_dx(&self) -> Option<f32> {
        self.last_raw_dx
    }

    /// Records a raw delta and computes the resulting offset.
    pub fn on_drag_changed(
        &mut self,
        raw_dx: f32,
        mode: IndexingMode,
        current_index: usize,
        count: usize,
        container_width: f32,
    ) -> DragSample {
        self.last_raw_dx = Some(raw_dx);
        self.sample(raw_dx, mode, current_index, count, container_width)
    }

    /// Ends the drag session, returning the last raw delta if one was recorded.
    pub fn end(&mut self) -> Option<f32> {
        self.last_raw_dx.take()
    }

    /// Computes an offset without touching the session bookkeeping.
    ///
    /// - `offset = raw_dx / divisor`
    /// - in `Bounded` mode, scaled by `edge_resistance` when no neighbor exists in the drag
    ///   direction
    /// - clamped to `±container_width * max_fraction`
    ///
    /// Sequences with fewer than two items and unmeasured containers always yield `0`.
    pub fn sample(
        &self,
        raw_dx: f32,
        mode: IndexingMode,
        current_index: usize,
        count: usize,
        container_width: f32,
    ) -> DragSample {
        if count < 2
            || !container_width.is_finite()
            || container_width <= 0.0
            || !raw_dx.is_finite()
        {
            return DragSample {
                offset: 0.0,
                direction: None,
            };
        }

        let mut offset = raw_dx / self.options.divisor;
        if mode == IndexingMode::Bounded {
            if let Some(direction) = Direction::from_offset(offset) {
                if cursor::neighbor_index(mode, count, current_index, direction).is_none() {
                    offset *= self.options.edge_resistance;
                }
            }
        }

        let limit = container_width * self.options.max_fraction;
        let offset = offset.clamp(-limit, limit);
        DragSample {
            offset,
            direction: Direction::from_offset(offset),
        }
    }
}
