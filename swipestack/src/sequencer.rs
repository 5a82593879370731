use crate::cursor;
use crate::state::NavigationState;
use crate::{Direction, NavigationEvent, NavigatorOptions, Tween};

/// The phase of the navigation state machine.
///
/// Commit path: `Idle → Spreading → Reindexed → Settling → Idle`.
/// Cancel path: `Idle → Cancelling → Idle`. A commit that finds no neighbor at the reindex step
/// also leaves through `Cancelling`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Idle,
    /// The offset is moving out to the spread distance. No index change yet.
    Spreading { direction: Direction },
    /// The index has just changed and the offset was negated. Held for `Timing::hold_ms`
    /// before settling; renderers can use it for the deck's "locked" embellishment.
    Reindexed { event: NavigationEvent },
    /// The negated offset is moving back to rest.
    Settling,
    /// The offset is moving back to rest without an index change.
    Cancelling { reason: CancelReason },
}

impl Phase {
    pub fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Why a transition snapped back instead of navigating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CancelReason {
    /// The drag was released before reaching the commit threshold.
    BelowThreshold,
    /// The commit found no neighbor in its direction (bounded edge).
    EdgeReached,
}

/// Notifications produced while the engine advances.
///
/// Emitted through a caller-supplied `&mut dyn FnMut(Signal)` so adapters can fan them out
/// without the engine allocating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    PhaseChanged(Phase),
    Navigated(NavigationEvent),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Continuation {
    Reindex,
    Settle,
    Finish,
}

/// Delayed continuations on the engine's single timeline.
///
/// Continuations run in due order (FIFO for equal due times) when the adapter ticks past them.
#[derive(Clone, Debug, Default)]
struct Schedule {
    pending: Vec<(u64, Continuation)>,
}

impl Schedule {
    fn schedule_after(&mut self, now_ms: u64, delay_ms: u64, step: Continuation) {
        let due_ms = now_ms.saturating_add(delay_ms);
        let at = self.pending.partition_point(|&(due, _)| due <= due_ms);
        self.pending.insert(at, (due_ms, step));
    }

    fn pop_due(&mut self, now_ms: u64) -> Option<(u64, Continuation)> {
        match self.pending.first() {
            Some(&(due_ms, _)) if due_ms <= now_ms => Some(self.pending.remove(0)),
            _ => None,
        }
    }

    fn next_due_ms(&self) -> Option<u64> {
        self.pending.first().map(|&(due_ms, _)| due_ms)
    }
}

/// Drives one committed or cancelled navigation through its animated phases.
///
/// The sequencer is the only writer of `busy`, and it only accepts a new run while idle.
#[derive(Clone, Debug, Default)]
pub(crate) struct Sequencer {
    phase: Phase,
    tween: Option<Tween>,
    schedule: Schedule,
    restore_direction: Option<Direction>,
}

impl Sequencer {
    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn is_idle(&self) -> bool {
        self.phase.is_idle()
    }

    pub(crate) fn next_due_ms(&self) -> Option<u64> {
        self.schedule.next_due_ms()
    }

    pub(crate) fn begin_commit(
        &mut self,
        options: &NavigatorOptions,
        state: &mut NavigationState,
        direction: Direction,
        now_ms: u64,
        sink: &mut dyn FnMut(Signal),
    ) {
        debug_assert!(self.is_idle(), "begin_commit while a transition is running");
        let target = direction.sign() * state.container_width * options.spread_fraction;
        ndebug!(
            ?direction,
            from = state.offset,
            to = target,
            now_ms,
            "transition: commit"
        );
        state.direction = direction;
        self.enter(Phase::Spreading { direction }, state, sink);
        let duration_ms =
            self.animate(state.offset, target, now_ms, options.timing.spread_ms, options);
        self.schedule.schedule_after(now_ms, duration_ms, Continuation::Reindex);
    }

    /// Snaps the offset back to rest. `origin` is the direction from before the drag began; it
    /// is restored once the offset is back at rest.
    pub(crate) fn begin_cancel(
        &mut self,
        options: &NavigatorOptions,
        state: &mut NavigationState,
        origin: Direction,
        now_ms: u64,
        sink: &mut dyn FnMut(Signal),
    ) {
        debug_assert!(self.is_idle(), "begin_cancel while a transition is running");
        ndebug!(from = state.offset, now_ms, "transition: cancel");
        self.restore_direction = Some(origin);
        self.restore(CancelReason::BelowThreshold, options, state, now_ms, sink);
    }

    /// Runs every continuation due at or before `now_ms`, then samples the active tween.
    ///
    /// Continuations run at their own due time, so a late tick replays the exact timeline.
    pub(crate) fn tick(
        &mut self,
        options: &NavigatorOptions,
        state: &mut NavigationState,
        now_ms: u64,
        sink: &mut dyn FnMut(Signal),
    ) {
        while let Some((due_ms, step)) = self.schedule.pop_due(now_ms) {
            self.sample(state, due_ms);
            self.run(step, options, state, due_ms, sink);
        }
        self.sample(state, now_ms);
    }

    fn run(
        &mut self,
        step: Continuation,
        options: &NavigatorOptions,
        state: &mut NavigationState,
        now_ms: u64,
        sink: &mut dyn FnMut(Signal),
    ) {
        match step {
            Continuation::Reindex => self.reindex(options, state, now_ms, sink),
            Continuation::Settle => {
                self.enter(Phase::Settling, state, sink);
                let duration_ms =
                    self.animate(state.offset, 0.0, now_ms, options.timing.settle_ms, options);
                self.schedule.schedule_after(now_ms, duration_ms, Continuation::Finish);
            }
            Continuation::Finish => {
                self.tween = None;
                state.offset = 0.0;
                if let Some(direction) = self.restore_direction.take() {
                    state.direction = direction;
                }
                self.enter(Phase::Idle, state, sink);
            }
        }
    }

    fn reindex(
        &mut self,
        options: &NavigatorOptions,
        state: &mut NavigationState,
        now_ms: u64,
        sink: &mut dyn FnMut(Signal),
    ) {
        let Phase::Spreading { direction } = self.phase else {
            nwarn!(phase = ?self.phase, "reindex outside of the spreading phase");
            debug_assert!(false, "reindex outside of the spreading phase");
            return;
        };

        let previous_index = state.current_index;
        let Some(index) =
            cursor::neighbor_index(options.mode, options.count, previous_index, direction)
        else {
            ndebug!(?direction, previous_index, "transition: edge reached");
            self.restore(CancelReason::EdgeReached, options, state, now_ms, sink);
            return;
        };

        // The new current item is the old neighbor, so flipping the sign keeps it in place.
        self.tween = None;
        state.offset = -state.offset;
        state.current_index = index;
        state.direction = direction.opposite();

        let event = NavigationEvent {
            index,
            previous_index,
            direction,
        };
        self.enter(Phase::Reindexed { event }, state, sink);
        sink(Signal::Navigated(event));
        self.schedule
            .schedule_after(now_ms, options.timing.hold_ms, Continuation::Settle);
    }

    fn restore(
        &mut self,
        reason: CancelReason,
        options: &NavigatorOptions,
        state: &mut NavigationState,
        now_ms: u64,
        sink: &mut dyn FnMut(Signal),
    ) {
        self.enter(Phase::Cancelling { reason }, state, sink);
        let duration_ms =
            self.animate(state.offset, 0.0, now_ms, options.timing.restore_ms, options);
        self.schedule.schedule_after(now_ms, duration_ms, Continuation::Finish);
    }

    fn animate(
        &mut self,
        from: f32,
        to: f32,
        now_ms: u64,
        duration_ms: u64,
        options: &NavigatorOptions,
    ) -> u64 {
        let tween = Tween::new(from, to, now_ms, duration_ms, options.easing);
        self.tween = Some(tween);
        tween.duration_ms
    }

    fn sample(&self, state: &mut NavigationState, now_ms: u64) {
        if let Some(tween) = &self.tween {
            state.offset = tween.sample(now_ms);
        }
    }

    fn enter(&mut self, phase: Phase, state: &mut NavigationState, sink: &mut dyn FnMut(Signal)) {
        ntrace!(from = ?self.phase, to = ?phase, "phase");
        self.phase = phase;
        state.busy = !phase.is_idle();
        sink(Signal::PhaseChanged(phase));
    }
}
