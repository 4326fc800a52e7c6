#![cfg(feature = "async")]
//! Integration tests for `TokioScheduler` with paused tokio time.
//!
//! Tests cover:
//! - `delay` firing only after the wait has elapsed
//! - `throttle` leading and trailing edges on real timers
//! - Cancellation of scheduled tasks

use std::sync::{Arc, Mutex};
use std::time::Duration;

use rstest::rstest;
use tokio::sync::mpsc;
use underbar::prelude::*;

#[tokio::test(start_paused = true)]
async fn delay_fires_after_wait() {
    let scheduler = TokioScheduler::current().expect("runtime");
    let (sender, mut receiver) = mpsc::unbounded_channel();
    let start = tokio::time::Instant::now();

    delay(
        &scheduler,
        move |value: u32| sender.send(value),
        Duration::from_millis(200),
        9,
    );

    assert_eq!(receiver.recv().await, Some(9));
    assert!(start.elapsed() >= Duration::from_millis(200));
}

#[tokio::test(start_paused = true)]
async fn throttle_runs_leading_and_trailing_edges() {
    let scheduler = TokioScheduler::current().expect("runtime");
    let (sender, mut receiver) = mpsc::unbounded_channel();
    let throttled = throttle(
        scheduler,
        move |value: u32| {
            let _ = sender.send(value);
            value
        },
        Duration::from_millis(100),
    );

    assert_eq!(throttled.call(1), 1);
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(throttled.call(2), 1);
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(throttled.call(3), 1);

    assert_eq!(receiver.recv().await, Some(1));
    assert_eq!(receiver.recv().await, Some(3));

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(receiver.try_recv().is_err());
    assert!(!throttled.has_pending());
}

#[tokio::test(start_paused = true)]
async fn throttle_trailing_result_is_returned_later() {
    let scheduler = TokioScheduler::current().expect("runtime");
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let throttled = throttle(
        scheduler,
        move |value: u32| {
            sink.lock().unwrap().push(value);
            value * 2
        },
        Duration::from_millis(50),
    );

    throttled.call(1);
    tokio::time::sleep(Duration::from_millis(10)).await;
    throttled.call(4);
    tokio::time::sleep(Duration::from_millis(45)).await;

    assert_eq!(*seen.lock().unwrap(), vec![1, 4]);
    assert_eq!(throttled.call(5), 8);
}

#[tokio::test(start_paused = true)]
async fn scheduler_clock_follows_paused_time() {
    let scheduler = TokioScheduler::current().expect("runtime");
    let before = scheduler.now();
    tokio::time::sleep(Duration::from_secs(3)).await;
    assert!(scheduler.now() - before >= Duration::from_secs(3));
}

#[tokio::test(start_paused = true)]
async fn cancel_after_fire_reports_not_pending() {
    let scheduler = TokioScheduler::current().expect("runtime");
    let (sender, mut receiver) = mpsc::unbounded_channel();
    let handle = scheduler.schedule(
        Duration::from_millis(5),
        Box::new(move || {
            let _ = sender.send(());
        }),
    );
    assert_eq!(receiver.recv().await, Some(()));
    tokio::task::yield_now().await;
    assert!(!scheduler.cancel(handle));
}

#[rstest]
fn from_handle_uses_explicit_runtime() {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("runtime");
    let scheduler = TokioScheduler::from_handle(runtime.handle().clone());
    let (sender, receiver) = std::sync::mpsc::channel();
    delay(
        &scheduler,
        move |value: &'static str| sender.send(value),
        Duration::from_millis(1),
        "fired",
    );
    runtime.block_on(async { tokio::time::sleep(Duration::from_millis(5)).await });
    assert_eq!(receiver.recv_timeout(Duration::from_secs(1)), Ok("fired"));
}
