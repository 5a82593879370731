use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use swipestack::{Direction, IndexingMode, NavigatorOptions};
use swipestack_adapter::Controller;

fn main() {
    // Example: a bounded deck with every kind of observer attached. The deck embellishment
    // (e.g. a rotation) would read the translation, while the page indicator only needs
    // navigation events.
    let mut c = Controller::new(NavigatorOptions::deck(3).with_mode(IndexingMode::Bounded));
    c.measured_container_width(320.0);

    let navigations = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&navigations);
    c.subscribe(move |event| {
        counter.fetch_add(1, Ordering::Relaxed);
        println!("navigated to {} ({:?})", event.index, event.direction);
    });
    c.on_phase(|phase| println!("  phase {phase:?}"));
    let rotation = c.on_translation(|t| println!("  rotation {:.1}deg", t * 8.0));

    let mut now_ms = 0;
    for direction in [Direction::Right, Direction::Right, Direction::Right] {
        // The last request hits the bounded edge and is dropped.
        let started = c.trigger(direction, now_ms);
        println!("trigger {direction:?}: started={started}");
        while c.tick(now_ms).is_some() {
            now_ms += 16;
        }
        if c.current_index() == 1 {
            c.unsubscribe(rotation);
        }
    }

    assert_eq!(c.current_index(), 2);
    assert_eq!(navigations.load(Ordering::Relaxed), 2);
}
