use swipestack::{Direction, IndexingMode, Navigator, NavigatorOptions, Signal};

fn main() {
    // Example: a rendering layer feeding a drag gesture into the engine, then animating the
    // committed transition at 60fps.
    let items = ["A", "B", "C"];
    let mut nav = Navigator::new(
        NavigatorOptions::new(items.len())
            .with_mode(IndexingMode::Looping)
            .with_initial_index(2)
            .with_threshold_fraction(0.5)
            .with_drag_divisor(1.0),
    );
    nav.set_container_width(300.0);

    // The pointer moves right; the offset follows it and reveals the previous card.
    for raw_dx in [40.0, 90.0, 130.0, 160.0] {
        nav.on_drag_changed(raw_dx);
        println!("drag raw_dx={raw_dx} offset={} dir={:?}", nav.offset(), nav.direction());
    }

    let mut sink = |signal: Signal| match signal {
        Signal::Navigated(event) => println!(
            "navigated {} -> {} ({:?})",
            items[event.previous_index], items[event.index], event.direction
        ),
        Signal::PhaseChanged(phase) => println!("phase {phase:?}"),
    };

    let decision = nav.on_drag_ended(0, &mut sink);
    println!("released: {decision:?}");

    let mut now_ms = 0u64;
    while let Some(offset) = nav.tick(now_ms, &mut sink) {
        if now_ms % 80 == 0 {
            println!("t={now_ms} offset={offset:.1} current={}", items[nav.current_index()]);
        }
        now_ms += 16;
    }

    assert_eq!(nav.current_index(), 1);
    assert_eq!(nav.direction(), Direction::Right);
    println!("done: {:?}", nav.snapshot());
}
