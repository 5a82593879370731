use std::thread;
use std::time::{Duration, Instant};

use swipestack::{Direction, NavigatorOptions};
use swipestack_adapter::Controller;

fn main() {
    // Example: an auto-advancing carousel. A timer thread requests navigation through the
    // trigger channel while the UI thread keeps ticking the controller.
    let slides = ["intro", "features", "pricing", "contact"];
    let mut c = Controller::new(NavigatorOptions::carousel(slides.len()));
    c.measured_container_width(360.0);

    let sender = c.trigger_sender();
    let timer = thread::spawn(move || {
        for _ in 0..6 {
            thread::sleep(Duration::from_millis(400));
            if !sender.send(Direction::Right) {
                break;
            }
        }
    });

    let rx = c.subscribe_channel();
    let start = Instant::now();
    while start.elapsed() < Duration::from_millis(2_700) {
        let now_ms = start.elapsed().as_millis() as u64;
        c.tick(now_ms);
        while let Ok(event) = rx.try_recv() {
            println!(
                "t={now_ms} {} -> {}",
                slides[event.previous_index], slides[event.index]
            );
        }
        thread::sleep(Duration::from_millis(16));
    }

    let _ = timer.join();
    println!("done: {:?}", c.snapshot());
}
