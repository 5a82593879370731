use crate::commit;
use crate::cursor;
use crate::sequencer::Sequencer;
use crate::state::NavigationState;
use crate::{Decision, Direction, DragTracker, NavigatorOptions, Phase, Signal, Snapshot};

/// A headless swipe navigation engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects or items, only the item count.
/// - Your adapter drives it with container widths, raw drag deltas and `now_ms` timestamps.
/// - Animated phases advance only when you call [`Navigator::tick`].
///
/// Methods that can start or advance a transition take a `sink` that receives every
/// [`Signal`] (phase changes and navigation events) synchronously. For observer registration
/// and a trigger channel, see the `swipestack-adapter` crate.
#[derive(Clone, Debug)]
pub struct Navigator {
    options: NavigatorOptions,
    state: NavigationState,
    drag: DragTracker,
    drag_origin: Option<Direction>,
    sequencer: Sequencer,
}

impl Navigator {
    /// Creates a navigator from options.
    ///
    /// Out-of-range fractions are clamped and an out-of-range initial index is clamped or
    /// wrapped according to the indexing mode.
    pub fn new(options: NavigatorOptions) -> Self {
        let options = options.sanitized();
        let current_index = options.mode.resolve_initial(options.count, options.initial_index);
        if current_index != options.initial_index {
            nwarn!(
                requested = options.initial_index,
                resolved = current_index,
                count = options.count,
                "initial index out of range"
            );
        }
        ndebug!(
            count = options.count,
            mode = ?options.mode,
            current_index,
            "Navigator::new"
        );
        Self {
            state: NavigationState::new(current_index),
            drag: DragTracker::new(options.drag),
            drag_origin: None,
            sequencer: Sequencer::default(),
            options,
        }
    }

    pub fn options(&self) -> &NavigatorOptions {
        &self.options
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn phase(&self) -> Phase {
        self.sequencer.phase()
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn offset(&self) -> f32 {
        self.state.offset
    }

    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    pub fn is_busy(&self) -> bool {
        self.state.busy
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    pub fn container_width(&self) -> f32 {
        self.state.container_width
    }

    /// The next timestamp at which [`Navigator::tick`] will run a phase change.
    ///
    /// Adapters without a frame loop can use it to schedule a wakeup.
    pub fn next_wakeup_ms(&self) -> Option<u64> {
        self.sequencer.next_due_ms()
    }

    /// How far the offset has travelled towards the spread distance, in `[0, 1]`.
    ///
    /// This is a presentation convenience and not part of the navigation contract. It is `0`
    /// before the container is measured.
    pub fn translation(&self) -> f32 {
        let span = self.state.container_width * self.options.spread_fraction;
        if span <= 0.0 {
            return 0.0;
        }
        (self.state.offset.abs() / span).min(1.0)
    }

    /// Returns the item that becomes current when navigating towards `direction`.
    pub fn neighbor_index(&self, direction: Direction) -> Option<usize> {
        cursor::neighbor_index(
            self.options.mode,
            self.options.count,
            self.state.current_index,
            direction,
        )
    }

    /// Applies a layout measurement of the container width.
    ///
    /// Negative and non-finite widths are treated as "not measured" (`0`).
    pub fn set_container_width(&mut self, width: f32) {
        let width = if width.is_finite() && width > 0.0 {
            width
        } else {
            if width != 0.0 {
                nwarn!(width, "invalid container width, treating as unmeasured");
            }
            0.0
        };
        if self.state.container_width == width {
            return;
        }
        ntrace!(width, "set_container_width");
        self.state.container_width = width;
        self.reapply_drag();
    }

    /// Applies a raw horizontal drag delta (total translation since the drag began).
    ///
    /// Returns `true` when the offset was updated. While busy the delta is only recorded, and
    /// the latest recorded delta takes effect once the running transition finishes.
    pub fn on_drag_changed(&mut self, raw_dx: f32) -> bool {
        if self.options.swipe_disabled {
            return false;
        }
        if !raw_dx.is_finite() {
            nwarn!(raw_dx, "ignoring non-finite drag delta");
            return false;
        }
        let sample = self.drag.on_drag_changed(
            raw_dx,
            self.options.mode,
            self.state.current_index,
            self.options.count,
            self.state.container_width,
        );
        if self.state.busy {
            ntrace!(raw_dx, "drag while busy, deferred");
            return false;
        }
        self.apply_drag_offset(sample.offset, sample.direction);
        true
    }

    /// Ends the drag session and decides between commit and cancel.
    ///
    /// Returns `None` when no decision was taken: no active drag, swipes disabled, a transition
    /// already running, or the offset at rest.
    pub fn on_drag_ended(&mut self, now_ms: u64, sink: &mut dyn FnMut(Signal)) -> Option<Decision> {
        if self.options.swipe_disabled {
            return None;
        }
        self.drag.end()?;
        let origin = self.drag_origin.take();
        if self.state.busy {
            ntrace!("drag ended while busy, ignored");
            return None;
        }

        let offset = self.state.offset;
        let Some(direction) = Direction::from_offset(offset) else {
            if let Some(origin) = origin {
                self.state.direction = origin;
            }
            return None;
        };
        let decision = commit::evaluate(
            offset,
            self.state.container_width,
            self.options.threshold_fraction,
        );
        ndebug!(offset, ?decision, "drag ended");
        match decision {
            Decision::Commit => self.sequencer.begin_commit(
                &self.options,
                &mut self.state,
                direction,
                now_ms,
                sink,
            ),
            Decision::Cancel => self.sequencer.begin_cancel(
                &self.options,
                &mut self.state,
                origin.unwrap_or(direction),
                now_ms,
                sink,
            ),
        }
        Some(decision)
    }

    /// Returns `true` when a programmatic navigation towards `direction` would start now.
    ///
    /// Requires an idle engine at rest, a measured container, and a neighbor in that direction
    /// (which also rules out sequences with fewer than two items).
    pub fn can_trigger(&self, direction: Direction) -> bool {
        !self.state.busy
            && self.state.offset == 0.0
            && self.state.container_width > 0.0
            && self.neighbor_index(direction).is_some()
    }

    /// Starts a programmatic navigation, exactly as if a drag had committed.
    ///
    /// Returns `false` (and does nothing) when [`Navigator::can_trigger`] does not hold.
    pub fn trigger(
        &mut self,
        direction: Direction,
        now_ms: u64,
        sink: &mut dyn FnMut(Signal),
    ) -> bool {
        if !self.can_trigger(direction) {
            ndebug!(
                ?direction,
                busy = self.state.busy,
                offset = self.state.offset,
                "trigger dropped"
            );
            return false;
        }
        self.sequencer.begin_commit(&self.options, &mut self.state, direction, now_ms, sink);
        // A drag still in progress re-records its origin once this transition finishes.
        self.drag_origin = None;
        true
    }

    /// Advances the running transition to `now_ms`.
    ///
    /// - If a transition is running, runs every phase change due by `now_ms` and returns the
    ///   new offset.
    /// - Otherwise returns `None`.
    pub fn tick(&mut self, now_ms: u64, sink: &mut dyn FnMut(Signal)) -> Option<f32> {
        if self.sequencer.is_idle() {
            return None;
        }
        self.sequencer.tick(&self.options, &mut self.state, now_ms, sink);
        if self.sequencer.is_idle() {
            self.reapply_drag();
        }
        Some(self.state.offset)
    }

    fn apply_drag_offset(&mut self, offset: f32, direction: Option<Direction>) {
        self.drag_origin.get_or_insert(self.state.direction);
        self.state.offset = offset;
        if let Some(direction) = direction {
            self.state.direction = direction;
        }
    }

    fn reapply_drag(&mut self) {
        if self.state.busy {
            return;
        }
        let Some(raw_dx) = self.drag.last_raw_dx() else {
            return;
        };
        let sample = self.drag.sample(
            raw_dx,
            self.options.mode,
            self.state.current_index,
            self.options.count,
            self.state.container_width,
        );
        self.apply_drag_offset(sample.offset, sample.direction);
    }
}
