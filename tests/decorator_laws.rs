#![cfg(feature = "function")]
//! Property-based tests for the function decorators.
//!
//! This module verifies that:
//!
//! - **Once**: the wrapped function runs exactly once and every call sees
//!   the first result
//! - **Memoize**: each distinct truthy argument is computed exactly once
//! - **Throttle**: calls packed into one window produce one leading and at
//!   most one trailing run, the trailing one with the latest argument

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use proptest::prelude::*;
use underbar::function::{memoize, once, throttle};
use underbar::scheduler::ManualScheduler;

// =============================================================================
// Once Law
// =============================================================================

proptest! {
    /// once runs its function once regardless of how often it is called
    #[test]
    fn prop_once_runs_exactly_once(arguments in prop::collection::vec(any::<i32>(), 1..32)) {
        let calls = AtomicUsize::new(0);
        let wrapped = once(|value: i32| {
            calls.fetch_add(1, Ordering::SeqCst);
            value
        });
        let results: Vec<i32> = arguments.iter().map(|argument| wrapped.call(*argument)).collect();
        prop_assert_eq!(calls.load(Ordering::SeqCst), 1);
        prop_assert!(results.iter().all(|result| *result == arguments[0]));
    }
}

// =============================================================================
// Memoize Law
// =============================================================================

proptest! {
    /// memoize computes each distinct truthy argument once
    #[test]
    fn prop_memoize_computes_distinct_arguments_once(
        arguments in prop::collection::vec(1u16..64, 0..64),
    ) {
        let calls = AtomicUsize::new(0);
        let doubled = memoize(|value: u16| {
            calls.fetch_add(1, Ordering::SeqCst);
            u32::from(value) * 2
        });
        for argument in &arguments {
            prop_assert_eq!(doubled.call(*argument), u32::from(*argument) * 2);
        }
        let distinct: HashSet<u16> = arguments.iter().copied().collect();
        prop_assert_eq!(calls.load(Ordering::SeqCst), distinct.len());
        prop_assert_eq!(doubled.len(), distinct.len());
    }
}

// =============================================================================
// Throttle Law
// =============================================================================

proptest! {
    /// bursts inside one window run at most twice, last argument trailing
    #[test]
    fn prop_throttle_burst_runs_leading_and_latest(
        gaps in prop::collection::vec(0u64..10, 1..10),
    ) {
        let scheduler = ManualScheduler::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        let throttled = throttle(
            scheduler.clone(),
            move |value: usize| sink.lock().unwrap().push(value),
            Duration::from_millis(100),
        );

        throttled.call(0);
        for (index, gap) in gaps.iter().enumerate() {
            scheduler.advance(Duration::from_millis(*gap));
            throttled.call(index + 1);
        }
        scheduler.run_until_idle();

        let runs = log.lock().unwrap().clone();
        prop_assert_eq!(runs, vec![0, gaps.len()]);
    }
}
