use crate::*;

use std::sync::{Arc, Mutex};

use swipestack::{Decision, Direction, IndexingMode, NavigationEvent, NavigatorOptions, Phase};

const FRAME_MS: u64 = 16;

/// Three items, looping, threshold 0.5, offset follows the pointer 1:1, measured at 300.
fn abc_controller(index: usize) -> Controller {
    let mut c = Controller::new(
        NavigatorOptions::new(3)
            .with_mode(IndexingMode::Looping)
            .with_initial_index(index)
            .with_threshold_fraction(0.5)
            .with_drag_divisor(1.0),
    );
    c.measured_container_width(300.0);
    c
}

fn run_until_idle(c: &mut Controller, start_ms: u64) -> u64 {
    let mut now_ms = start_ms;
    for _ in 0..1_000 {
        if !c.is_busy() {
            return now_ms;
        }
        now_ms += FRAME_MS;
        c.tick(now_ms);
    }
    panic!("controller never became idle");
}

fn recorder<T: Send + 'static>() -> (Arc<Mutex<Vec<T>>>, impl Fn(T) + Send + Sync + 'static) {
    let log: Arc<Mutex<Vec<T>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = {
        let log = Arc::clone(&log);
        move |item: T| log.lock().unwrap().push(item)
    };
    (log, sink)
}

#[test]
fn drag_commit_notifies_subscribers_once() {
    let mut c = abc_controller(2);
    let (log, push) = recorder::<NavigationEvent>();
    c.subscribe(move |e| push(*e));

    assert!(c.on_drag_changed(160.0, 0));
    assert_eq!(c.on_drag_ended(0), Some(Decision::Commit));
    run_until_idle(&mut c, 0);

    assert_eq!(
        *log.lock().unwrap(),
        [NavigationEvent {
            index: 1,
            previous_index: 2,
            direction: Direction::Left,
        }]
    );
    assert_eq!(c.current_index(), 1);
    assert_eq!(c.offset(), 0.0);
    assert_eq!(c.direction(), Direction::Right);
}

#[test]
fn cancel_notifies_nobody() {
    let mut c = abc_controller(2);
    let (log, push) = recorder::<NavigationEvent>();
    c.subscribe(move |e| push(*e));

    c.on_drag_changed(100.0, 0);
    assert_eq!(c.on_drag_ended(0), Some(Decision::Cancel));
    run_until_idle(&mut c, 0);

    assert!(log.lock().unwrap().is_empty());
    assert_eq!(c.current_index(), 2);
}

#[test]
fn unsubscribe_stops_notifications() {
    let mut c = abc_controller(0);
    let (log, push) = recorder::<NavigationEvent>();
    let id = c.subscribe(move |e| push(*e));

    assert!(c.trigger(Direction::Right, 0));
    let now_ms = run_until_idle(&mut c, 0);
    assert_eq!(log.lock().unwrap().len(), 1);

    assert!(c.unsubscribe(id));
    assert!(!c.unsubscribe(id));
    assert!(c.trigger(Direction::Right, now_ms));
    run_until_idle(&mut c, now_ms);
    assert_eq!(log.lock().unwrap().len(), 1);
    assert_eq!(c.current_index(), 2);
}

#[test]
fn channel_subscribers_receive_events_and_are_pruned_when_dropped() {
    let mut c = abc_controller(0);
    let rx = c.subscribe_channel();
    let dropped = c.subscribe_channel();
    drop(dropped);

    assert!(c.trigger(Direction::Right, 0));
    let now_ms = run_until_idle(&mut c, 0);
    assert_eq!(
        rx.try_recv().ok(),
        Some(NavigationEvent {
            index: 1,
            previous_index: 0,
            direction: Direction::Right,
        })
    );
    assert!(rx.try_recv().is_err());

    drop(rx);
    assert!(c.trigger(Direction::Right, now_ms));
    run_until_idle(&mut c, now_ms);
    assert_eq!(c.current_index(), 2);
}

#[test]
fn phase_observers_see_the_commit_path() {
    let mut c = abc_controller(0);
    let (log, push) = recorder::<Phase>();
    c.on_phase(push);

    assert!(c.trigger(Direction::Right, 0));
    run_until_idle(&mut c, 0);

    let phases = log.lock().unwrap().clone();
    assert_eq!(phases.len(), 4);
    assert_eq!(
        phases[0],
        Phase::Spreading {
            direction: Direction::Right
        }
    );
    assert!(matches!(phases[1], Phase::Reindexed { event } if event.index == 1));
    assert_eq!(phases[2], Phase::Settling);
    assert_eq!(phases[3], Phase::Idle);
}

#[test]
fn translation_observers_follow_the_offset() {
    let mut c = abc_controller(0);
    let (log, push) = recorder::<f32>();
    c.on_translation(push);

    c.on_drag_changed(75.0, 0);
    c.on_drag_changed(75.0, 0);
    assert_eq!(*log.lock().unwrap(), [0.5]);

    c.on_drag_ended(0);
    run_until_idle(&mut c, 0);

    let values = log.lock().unwrap().clone();
    assert!(values.len() > 2);
    assert!(values.iter().all(|t| (0.0..=1.0).contains(t)));
    assert_eq!(values.last().copied(), Some(0.0));
}

#[test]
fn triggers_from_another_thread_run_on_tick() {
    let mut c = abc_controller(0);
    let sender = c.trigger_sender();
    std::thread::spawn(move || {
        assert!(sender.send(Direction::Right));
    })
    .join()
    .unwrap();

    assert!(!c.is_busy());
    assert!(c.tick(0).is_some());
    assert!(c.is_busy());
    run_until_idle(&mut c, 0);
    assert_eq!(c.current_index(), 1);
}

#[test]
fn triggers_queued_while_busy_are_dropped() {
    let mut c = abc_controller(0);
    let sender = c.trigger_sender();
    sender.send(Direction::Right);
    sender.send(Direction::Right);
    sender.send(Direction::Left);

    assert!(c.poll_triggers(0));
    let now_ms = run_until_idle(&mut c, 0);
    assert_eq!(c.current_index(), 1);

    // Nothing was kept for later.
    assert!(!c.poll_triggers(now_ms));
    assert_eq!(c.tick(now_ms + FRAME_MS), None);
    assert_eq!(c.current_index(), 1);
}

#[test]
fn trigger_reports_its_own_request_behind_queued_ones() {
    let mut c = abc_controller(0);
    assert!(c.trigger_sender().send(Direction::Right));

    assert!(!c.trigger(Direction::Left, 0));
    assert_eq!(
        c.phase(),
        Phase::Spreading {
            direction: Direction::Right
        }
    );
    let now_ms = run_until_idle(&mut c, 0);
    assert_eq!(c.current_index(), 1);

    assert!(c.trigger(Direction::Left, now_ms));
    run_until_idle(&mut c, now_ms);
    assert_eq!(c.current_index(), 0);
}

#[test]
fn trigger_is_dropped_before_measurement() {
    let mut c = Controller::new(NavigatorOptions::new(3));
    assert!(!c.trigger(Direction::Right, 0));
    assert!(!c.is_busy());

    c.measured_container_width(300.0);
    assert!(c.trigger(Direction::Right, 0));
}

#[test]
fn sender_reports_a_dropped_controller() {
    let c = abc_controller(0);
    let sender = c.trigger_sender();
    assert!(sender.send(Direction::Left));
    drop(c);
    assert!(!sender.send(Direction::Left));
}

#[test]
fn snapshot_matches_the_navigator() {
    let mut c = abc_controller(1);
    c.on_drag_changed(-30.0, 0);
    assert_eq!(c.snapshot(), c.navigator().snapshot());
    assert_eq!(c.snapshot().offset, -30.0);
    assert_eq!(c.snapshot().direction, Direction::Right);
    assert!(!c.snapshot().busy);
}
