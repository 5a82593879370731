use swipestack::{Direction, IndexingMode, Navigator, NavigatorOptions, Phase, Signal};

fn main() {
    // Example: programmatic navigation on a bounded deck, driven by `next_wakeup_ms` instead of
    // a frame loop. The last trigger hits the end of the deck and is dropped.
    let mut nav = Navigator::new(NavigatorOptions::deck(3).with_mode(IndexingMode::Bounded));
    nav.set_container_width(320.0);

    let mut sink = |signal: Signal| {
        if let Signal::PhaseChanged(Phase::Reindexed { event }) = signal {
            println!("reindexed: {event:?}");
        }
    };

    let mut now_ms = 0u64;
    for _ in 0..3 {
        let started = nav.trigger(Direction::Right, now_ms, &mut sink);
        println!("t={now_ms} trigger(Right) started={started}");
        while let Some(wakeup) = nav.next_wakeup_ms() {
            now_ms = wakeup;
            nav.tick(now_ms, &mut sink);
            println!("t={now_ms} phase={:?} offset={:.1}", nav.phase(), nav.offset());
        }
    }

    println!("final index={} busy={}", nav.current_index(), nav.is_busy());
}
