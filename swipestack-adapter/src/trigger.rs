use std::sync::mpsc;

use swipestack::Direction;

/// A cloneable handle that requests programmatic navigation from any thread.
///
/// Requests are delivered in order and are never queued behind a running transition: the
/// controller drops every request it drains while busy.
#[derive(Clone, Debug)]
pub struct TriggerSender {
    tx: mpsc::Sender<Direction>,
}

impl TriggerSender {
    /// Enqueues a navigation request.
    ///
    /// Returns `false` once the owning controller has been dropped.
    pub fn send(&self, direction: Direction) -> bool {
        self.tx.send(direction).is_ok()
    }
}

/// An unbounded, ordered stream of navigation requests.
///
/// The channel keeps its own sender alive, so it never reports disconnection while it exists.
#[derive(Debug)]
pub struct TriggerChannel {
    tx: mpsc::Sender<Direction>,
    rx: mpsc::Receiver<Direction>,
}

impl TriggerChannel {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    pub fn sender(&self) -> TriggerSender {
        TriggerSender {
            tx: self.tx.clone(),
        }
    }

    /// Takes the oldest pending request, if any.
    pub fn try_recv(&self) -> Option<Direction> {
        self.rx.try_recv().ok()
    }
}

impl Default for TriggerChannel {
    fn default() -> Self {
        Self::new()
    }
}
