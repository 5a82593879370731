use std::sync::{Arc, mpsc};

use swipestack::{
    Decision, Direction, NavigationEvent, Navigator, NavigatorOptions, Phase, Signal, Snapshot,
};

use crate::observer::Observers;
use crate::{SubscriptionId, TriggerChannel, TriggerSender};

/// A framework-neutral controller that wraps a [`swipestack::Navigator`] and owns its
/// observers and trigger channel.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `measured_container_width` when layout reports a width
/// - `on_drag_changed` / `on_drag_ended` for the horizontal drag gesture
/// - `tick(now_ms)` each frame/timer tick while [`Controller::is_busy`] is true
///
/// and read the [`Snapshot`] back every frame. Observers are called synchronously from inside
/// these methods, on the caller's thread.
#[derive(Debug)]
pub struct Controller {
    nav: Navigator,
    triggers: TriggerChannel,
    observers: Observers,
}

impl Controller {
    pub fn new(options: NavigatorOptions) -> Self {
        Self::from_navigator(Navigator::new(options))
    }

    pub fn from_navigator(nav: Navigator) -> Self {
        Self {
            nav,
            triggers: TriggerChannel::new(),
            observers: Observers::default(),
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    pub fn into_navigator(self) -> Navigator {
        self.nav
    }

    pub fn options(&self) -> &NavigatorOptions {
        self.nav.options()
    }

    pub fn current_index(&self) -> usize {
        self.nav.current_index()
    }

    pub fn offset(&self) -> f32 {
        self.nav.offset()
    }

    pub fn direction(&self) -> Direction {
        self.nav.direction()
    }

    pub fn is_busy(&self) -> bool {
        self.nav.is_busy()
    }

    pub fn phase(&self) -> Phase {
        self.nav.phase()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.nav.snapshot()
    }

    pub fn translation(&self) -> f32 {
        self.nav.translation()
    }

    pub fn next_wakeup_ms(&self) -> Option<u64> {
        self.nav.next_wakeup_ms()
    }

    pub fn measured_container_width(&mut self, width: f32) {
        self.drive(|nav, _| nav.set_container_width(width));
    }

    /// Applies a raw horizontal drag delta.
    ///
    /// Pending trigger requests are drained first so they keep their arrival order relative
    /// to the gesture.
    pub fn on_drag_changed(&mut self, raw_dx: f32, now_ms: u64) -> bool {
        self.poll_triggers(now_ms);
        self.drive(|nav, _| nav.on_drag_changed(raw_dx))
    }

    pub fn on_drag_ended(&mut self, now_ms: u64) -> Option<Decision> {
        self.poll_triggers(now_ms);
        self.drive(|nav, sink| nav.on_drag_ended(now_ms, sink))
    }

    /// Requests a programmatic navigation and processes it immediately.
    ///
    /// Requests already queued through [`Controller::trigger_sender`] run first. Returns `true`
    /// only when this request started a transition; it is dropped if a queued request is
    /// already running.
    pub fn trigger(&mut self, direction: Direction, now_ms: u64) -> bool {
        self.poll_triggers(now_ms);
        let accepted = self.drive(|nav, sink| nav.trigger(direction, now_ms, sink));
        adebug!(?direction, accepted, now_ms, "trigger");
        accepted
    }

    /// Returns a handle that timers or other threads can use to request navigation.
    pub fn trigger_sender(&self) -> TriggerSender {
        self.triggers.sender()
    }

    /// Drains every pending trigger request in arrival order.
    ///
    /// Requests that arrive while a transition is running (including one started by an
    /// earlier request in the same drain) are dropped. Returns `true` when a transition
    /// started.
    pub fn poll_triggers(&mut self, now_ms: u64) -> bool {
        let mut started = false;
        while let Some(direction) = self.triggers.try_recv() {
            let accepted = self.drive(|nav, sink| nav.trigger(direction, now_ms, sink));
            adebug!(?direction, accepted, now_ms, "trigger request");
            started |= accepted;
        }
        started
    }

    /// Advances the controller.
    ///
    /// - Drains pending trigger requests.
    /// - If a transition is running, advances it to `now_ms` and returns the new offset.
    /// - Otherwise returns `None`.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        self.poll_triggers(now_ms);
        self.drive(|nav, sink| nav.tick(now_ms, sink))
    }

    /// Registers an observer for committed navigations.
    pub fn subscribe(
        &mut self,
        observer: impl Fn(&NavigationEvent) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.observers.add_event(Arc::new(observer))
    }

    /// Returns a receiver that gets every committed navigation.
    ///
    /// Dropping the receiver unsubscribes it on the next event.
    pub fn subscribe_channel(&mut self) -> mpsc::Receiver<NavigationEvent> {
        self.observers.add_channel()
    }

    /// Registers an observer for phase changes.
    pub fn on_phase(&mut self, observer: impl Fn(Phase) + Send + Sync + 'static) -> SubscriptionId {
        self.observers.add_phase(Arc::new(observer))
    }

    /// Registers an observer that receives [`Controller::translation`] whenever the offset
    /// changes.
    pub fn on_translation(
        &mut self,
        observer: impl Fn(f32) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.observers.add_translation(Arc::new(observer))
    }

    /// Removes an observer. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(id)
    }

    fn drive<R>(&mut self, f: impl FnOnce(&mut Navigator, &mut dyn FnMut(Signal)) -> R) -> R {
        let before = self.nav.offset();
        let observers = &mut self.observers;
        let out = f(&mut self.nav, &mut |signal| observers.dispatch(signal));
        if self.nav.offset() != before {
            self.observers.notify_translation(self.nav.translation());
        }
        out
    }
}
