use std::fmt;
use std::sync::{Arc, mpsc};

use swipestack::{NavigationEvent, Phase, Signal};

pub type EventObserver = Arc<dyn Fn(&NavigationEvent) + Send + Sync>;
pub type PhaseObserver = Arc<dyn Fn(Phase) + Send + Sync>;
pub type TranslationObserver = Arc<dyn Fn(f32) + Send + Sync>;

/// Identifies a registered observer for [`crate::Controller::unsubscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Observers owned by a controller, notified synchronously in registration order.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    events: Vec<(SubscriptionId, EventObserver)>,
    phases: Vec<(SubscriptionId, PhaseObserver)>,
    translations: Vec<(SubscriptionId, TranslationObserver)>,
    channels: Vec<mpsc::Sender<NavigationEvent>>,
}

impl Observers {
    fn allocate(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        id
    }

    pub(crate) fn add_event(&mut self, observer: EventObserver) -> SubscriptionId {
        let id = self.allocate();
        self.events.push((id, observer));
        id
    }

    pub(crate) fn add_phase(&mut self, observer: PhaseObserver) -> SubscriptionId {
        let id = self.allocate();
        self.phases.push((id, observer));
        id
    }

    pub(crate) fn add_translation(&mut self, observer: TranslationObserver) -> SubscriptionId {
        let id = self.allocate();
        self.translations.push((id, observer));
        id
    }

    pub(crate) fn add_channel(&mut self) -> mpsc::Receiver<NavigationEvent> {
        let (tx, rx) = mpsc::channel();
        self.channels.push(tx);
        rx
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.events.len() + self.phases.len() + self.translations.len();
        self.events.retain(|(i, _)| *i != id);
        self.phases.retain(|(i, _)| *i != id);
        self.translations.retain(|(i, _)| *i != id);
        before != self.events.len() + self.phases.len() + self.translations.len()
    }

    pub(crate) fn dispatch(&mut self, signal: Signal) {
        match signal {
            Signal::PhaseChanged(phase) => {
                for (_, observer) in &self.phases {
                    observer(phase);
                }
            }
            Signal::Navigated(event) => {
                for (_, observer) in &self.events {
                    observer(&event);
                }
                let before = self.channels.len();
                self.channels.retain(|tx| tx.send(event).is_ok());
                if self.channels.len() != before {
                    atrace!(
                        dropped = before - self.channels.len(),
                        "pruned disconnected event channels"
                    );
                }
            }
        }
    }

    pub(crate) fn notify_translation(&self, translation: f32) {
        for (_, observer) in &self.translations {
            observer(translation);
        }
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("events", &self.events.len())
            .field("phases", &self.phases.len())
            .field("translations", &self.translations.len())
            .field("channels", &self.channels.len())
            .finish_non_exhaustive()
    }
}
