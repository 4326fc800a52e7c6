//! A scheduler driven by an explicitly advanced virtual clock.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use super::{Scheduler, Task};

// Offsets are clamped here so that `origin + elapsed` stays representable.
const HORIZON: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

fn offset(from: Duration, by: Duration) -> Duration {
    from.saturating_add(by).min(HORIZON)
}

/// Handle to a task queued on a [`ManualScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

struct Clock {
    origin: Instant,
    elapsed: Duration,
    next_id: u64,
    // Keyed by (deadline, id): ties fire in scheduling order.
    queue: BTreeMap<(Duration, TimerId), Task>,
    deadlines: HashMap<TimerId, Duration>,
}

impl Clock {
    fn pop_due(&mut self, until: Duration) -> Option<Task> {
        let (&(deadline, id), _) = self.queue.first_key_value()?;
        if deadline > until {
            return None;
        }
        let task = self.queue.remove(&(deadline, id))?;
        self.deadlines.remove(&id);
        self.elapsed = self.elapsed.max(deadline);
        Some(task)
    }
}

/// A deterministic scheduler whose time moves only when told to.
///
/// Time starts at the [`Instant`] the scheduler was created and advances
/// only through [`advance`](ManualScheduler::advance). Due tasks run on the
/// thread calling `advance`, in deadline order, with the clock set to each
/// task's deadline while it runs. Tasks scheduled by a running task are
/// honored within the same `advance` if they fall due before its end.
///
/// Clones share the same clock and queue.
///
/// The clock stops at a horizon of one hundred years. Deadlines further out
/// than that, including a wait of [`Duration::MAX`], are clamped to it.
///
/// # Examples
///
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use std::time::Duration;
/// use underbar::scheduler::{ManualScheduler, Scheduler};
///
/// let scheduler = ManualScheduler::new();
/// let log = Arc::new(Mutex::new(Vec::new()));
///
/// for (label, millis) in [("late", 30), ("early", 10)] {
///     let log = Arc::clone(&log);
///     scheduler.schedule(
///         Duration::from_millis(millis),
///         Box::new(move || log.lock().unwrap().push(label)),
///     );
/// }
///
/// assert_eq!(scheduler.advance(Duration::from_millis(30)), 2);
/// assert_eq!(*log.lock().unwrap(), vec!["early", "late"]);
/// ```
#[derive(Clone)]
pub struct ManualScheduler {
    clock: Arc<Mutex<Clock>>,
}

impl ManualScheduler {
    /// Creates a scheduler whose clock starts now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            clock: Arc::new(Mutex::new(Clock {
                origin: Instant::now(),
                elapsed: Duration::ZERO,
                next_id: 0,
                queue: BTreeMap::new(),
                deadlines: HashMap::new(),
            })),
        }
    }

    /// Returns how far the clock has advanced since creation.
    pub fn elapsed(&self) -> Duration {
        self.clock.lock().elapsed
    }

    /// Returns the number of tasks still waiting to fire.
    pub fn pending(&self) -> usize {
        self.clock.lock().queue.len()
    }

    /// Moves the clock forward by `by`, running every task that falls due.
    ///
    /// Returns the number of tasks that ran.
    pub fn advance(&self, by: Duration) -> usize {
        let until = offset(self.clock.lock().elapsed, by);
        let mut fired = 0;
        loop {
            // The lock is released before the task runs so the task may
            // schedule, cancel or read the clock.
            let due = self.clock.lock().pop_due(until);
            let Some(task) = due else {
                break;
            };
            task();
            fired += 1;
        }
        let mut clock = self.clock.lock();
        clock.elapsed = clock.elapsed.max(until);
        tracing::trace!(elapsed = ?clock.elapsed, fired, "manual clock advanced");
        fired
    }

    /// Runs every pending task, advancing the clock to the last deadline.
    ///
    /// Returns the number of tasks that ran.
    pub fn run_until_idle(&self) -> usize {
        let mut fired = 0;
        loop {
            let next = {
                let clock = self.clock.lock();
                clock
                    .queue
                    .first_key_value()
                    .map(|(&(deadline, _), _)| deadline.saturating_sub(clock.elapsed))
            };
            match next {
                Some(wait) => fired += self.advance(wait),
                None => return fired,
            }
        }
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clock = self.clock.lock();
        formatter
            .debug_struct("ManualScheduler")
            .field("elapsed", &clock.elapsed)
            .field("pending", &clock.queue.len())
            .finish()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = TimerId;

    fn now(&self) -> Instant {
        let clock = self.clock.lock();
        clock.origin + clock.elapsed
    }

    fn schedule(&self, wait: Duration, task: Task) -> TimerId {
        let mut clock = self.clock.lock();
        let id = TimerId(clock.next_id);
        clock.next_id += 1;
        let deadline = offset(clock.elapsed, wait);
        clock.queue.insert((deadline, id), task);
        clock.deadlines.insert(id, deadline);
        tracing::debug!(?id, ?wait, "timer scheduled");
        id
    }

    fn cancel(&self, handle: TimerId) -> bool {
        let mut clock = self.clock.lock();
        let Some(deadline) = clock.deadlines.remove(&handle) else {
            return false;
        };
        let removed = clock.queue.remove(&(deadline, handle)).is_some();
        tracing::debug!(id = ?handle, removed, "timer cancelled");
        removed
    }
}

static_assertions::assert_impl_all!(ManualScheduler: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_task(counter: &Arc<AtomicUsize>) -> Task {
        let counter = Arc::clone(counter);
        Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[rstest]
    fn task_does_not_fire_before_deadline() {
        let scheduler = ManualScheduler::new();
        let counter = Arc::new(AtomicUsize::new(0));
        scheduler.schedule(Duration::from_millis(5), counting_task(&counter));
        assert_eq!(scheduler.advance(Duration::from_millis(4)), 0);
        assert_eq!(counter.load(Ordering::SeqCst), 0);
        assert_eq!(scheduler.pending(), 1);
    }

    #[rstest]
    fn task_fires_at_deadline() {
        let scheduler = ManualScheduler::new();
        let counter = Arc::new(AtomicUsize::new(0));
        scheduler.schedule(Duration::from_millis(5), counting_task(&counter));
        assert_eq!(scheduler.advance(Duration::from_millis(5)), 1);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert_eq!(scheduler.pending(), 0);
    }

    #[rstest]
    fn cancelled_task_never_fires() {
        let scheduler = ManualScheduler::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let id = scheduler.schedule(Duration::from_millis(5), counting_task(&counter));
        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        scheduler.advance(Duration::from_secs(1));
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    fn now_follows_advance() {
        let scheduler = ManualScheduler::new();
        let start = scheduler.now();
        scheduler.advance(Duration::from_millis(250));
        assert_eq!(scheduler.now() - start, Duration::from_millis(250));
        assert_eq!(scheduler.elapsed(), Duration::from_millis(250));
    }

    #[rstest]
    fn clock_reads_deadline_while_task_runs() {
        let scheduler = ManualScheduler::new();
        let start = scheduler.now();
        let observed = Arc::new(Mutex::new(None));
        let inner_scheduler = scheduler.clone();
        let inner_observed = Arc::clone(&observed);
        scheduler.schedule(
            Duration::from_millis(30),
            Box::new(move || *inner_observed.lock() = Some(inner_scheduler.now())),
        );
        scheduler.advance(Duration::from_millis(100));
        assert_eq!(
            observed.lock().map(|instant| instant - start),
            Some(Duration::from_millis(30))
        );
    }

    #[rstest]
    fn tasks_scheduled_while_advancing_fire_in_same_advance() {
        let scheduler = ManualScheduler::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let chained_scheduler = scheduler.clone();
        let chained_counter = Arc::clone(&counter);
        scheduler.schedule(
            Duration::from_millis(10),
            Box::new(move || {
                chained_scheduler.schedule(Duration::from_millis(10), counting_task(&chained_counter));
            }),
        );
        assert_eq!(scheduler.advance(Duration::from_millis(20)), 2);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn equal_deadlines_fire_in_scheduling_order() {
        let scheduler = ManualScheduler::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        for label in 0..3 {
            let order = Arc::clone(&order);
            scheduler.schedule(Duration::from_millis(1), Box::new(move || order.lock().push(label)));
        }
        scheduler.advance(Duration::from_millis(1));
        assert_eq!(*order.lock(), vec![0, 1, 2]);
    }

    #[rstest]
    fn maximal_waits_saturate_at_the_horizon() {
        let scheduler = ManualScheduler::new();
        let start = scheduler.now();
        let counter = Arc::new(AtomicUsize::new(0));
        scheduler.schedule(Duration::MAX, counting_task(&counter));
        scheduler.advance(Duration::from_secs(1));
        scheduler.schedule(Duration::MAX, counting_task(&counter));
        assert_eq!(scheduler.pending(), 2);

        assert_eq!(scheduler.advance(Duration::MAX), 2);
        assert_eq!(scheduler.elapsed(), HORIZON);
        assert_eq!(scheduler.advance(Duration::MAX), 0);
        assert_eq!(scheduler.now() - start, HORIZON);
    }

    #[rstest]
    fn run_until_idle_drains_queue() {
        let scheduler = ManualScheduler::new();
        let counter = Arc::new(AtomicUsize::new(0));
        scheduler.schedule(Duration::from_secs(3), counting_task(&counter));
        scheduler.schedule(Duration::from_secs(1), counting_task(&counter));
        assert_eq!(scheduler.run_until_idle(), 2);
        assert_eq!(scheduler.elapsed(), Duration::from_secs(3));
    }
}
