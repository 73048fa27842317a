//! Single-shot timers.
//!
//! The success banner hides itself after a fixed delay. Controllers never
//! sleep: they ask a [`Scheduler`] for a timer and receive a [`TimerId`]. When
//! the timer fires the host feeds the id back as a `TimerFired` event, and the
//! controller ignores ids it no longer cares about.
//!
//! [`ManualScheduler`] keeps simulated time for tests and headless drivers.
//! With the `async` feature, `TokioScheduler` runs real timers on a tokio
//! runtime.
//!
//! ```
//! use brochure::timer::{ManualScheduler, Scheduler};
//! use std::time::Duration;
//!
//! let mut clock = ManualScheduler::new();
//! let id = clock.schedule(Duration::from_millis(5000));
//!
//! assert!(clock.advance(Duration::from_millis(4999)).is_empty());
//! assert_eq!(clock.advance(Duration::from_millis(1)), vec![id]);
//! ```

use std::fmt;
use std::time::Duration;

/// Identifies one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    /// The raw id value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Something that can arm and disarm fire-once timers.
pub trait Scheduler {
    /// Arm a timer that fires once after `delay`.
    fn schedule(&mut self, delay: Duration) -> TimerId;

    /// Disarm a timer. Returns `false` if it already fired or was unknown.
    fn cancel(&mut self, id: TimerId) -> bool;
}

/// A scheduler driven by simulated time.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    pending: Vec<(Duration, TimerId)>,
}

impl ManualScheduler {
    /// Create a scheduler at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulated time elapsed so far.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of armed timers.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// When `id` is due, if it is still armed.
    pub fn due_at(&self, id: TimerId) -> Option<Duration> {
        self.pending
            .iter()
            .find(|(_, pending)| *pending == id)
            .map(|(due, _)| *due)
    }

    /// Move time forward and return the timers that fired, earliest first.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerId> {
        self.now += by;
        let now = self.now;

        let mut fired: Vec<(Duration, TimerId)> = Vec::new();
        self.pending.retain(|&(due, id)| {
            if due <= now {
                fired.push((due, id));
                false
            } else {
                true
            }
        });
        fired.sort();
        fired.into_iter().map(|(_, id)| id).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.pending.push((self.now + delay, id));
        id
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|(_, pending)| *pending != id);
        self.pending.len() != before
    }
}

#[cfg(feature = "async")]
pub use tokio_scheduler::TokioScheduler;

#[cfg(feature = "async")]
mod tokio_scheduler {
    use std::collections::HashMap;
    use std::time::Duration;

    use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
    use tokio::runtime::{Handle, TryCurrentError};
    use tokio::task::JoinHandle;

    use super::{Scheduler, TimerId};

    /// Real timers on a tokio runtime.
    ///
    /// Fired ids arrive on the receiver returned by [`TokioScheduler::new`],
    /// which is a `futures` stream.
    ///
    /// ```rust
    /// use brochure::timer::{Scheduler, TokioScheduler};
    /// use futures::StreamExt;
    /// use std::time::Duration;
    ///
    /// # tokio_test::block_on(async {
    /// let (mut timers, mut fired) = TokioScheduler::new().expect("inside a runtime");
    /// let id = timers.schedule(Duration::from_millis(5));
    /// assert_eq!(fired.next().await, Some(id));
    /// # });
    /// ```
    #[derive(Debug)]
    pub struct TokioScheduler {
        handle: Handle,
        next_id: u64,
        tasks: HashMap<TimerId, JoinHandle<()>>,
        fired: UnboundedSender<TimerId>,
    }

    impl TokioScheduler {
        /// Create a scheduler bound to the current tokio runtime.
        pub fn new() -> Result<(Self, UnboundedReceiver<TimerId>), TryCurrentError> {
            let handle = Handle::try_current()?;
            let (fired, rx) = unbounded();
            Ok((
                Self {
                    handle,
                    next_id: 0,
                    tasks: HashMap::new(),
                    fired,
                },
                rx,
            ))
        }
    }

    impl Scheduler for TokioScheduler {
        fn schedule(&mut self, delay: Duration) -> TimerId {
            self.tasks.retain(|_, task| !task.is_finished());

            self.next_id += 1;
            let id = TimerId(self.next_id);
            let fired = self.fired.clone();
            let task = self.handle.spawn(async move {
                tokio::time::sleep(delay).await;
                // The host may have dropped the receiver while shutting down.
                let _ = fired.unbounded_send(id);
            });
            self.tasks.insert(id, task);
            id
        }

        fn cancel(&mut self, id: TimerId) -> bool {
            match self.tasks.remove(&id) {
                Some(task) if !task.is_finished() => {
                    task.abort();
                    true
                }
                _ => false,
            }
        }
    }

    impl Drop for TokioScheduler {
        fn drop(&mut self) {
            for task in self.tasks.values() {
                task.abort();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_exactly_at_deadline() {
        let mut clock = ManualScheduler::new();
        let id = clock.schedule(Duration::from_millis(100));
        assert_eq!(clock.due_at(id), Some(Duration::from_millis(100)));
        assert!(clock.advance(Duration::from_millis(99)).is_empty());
        assert_eq!(clock.advance(Duration::from_millis(1)), vec![id]);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn fires_once() {
        let mut clock = ManualScheduler::new();
        let id = clock.schedule(Duration::from_millis(10));
        assert_eq!(clock.advance(Duration::from_secs(1)), vec![id]);
        assert!(clock.advance(Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut clock = ManualScheduler::new();
        let id = clock.schedule(Duration::from_millis(10));
        assert!(clock.cancel(id));
        assert!(!clock.cancel(id));
        assert!(clock.advance(Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn fired_in_due_order() {
        let mut clock = ManualScheduler::new();
        let late = clock.schedule(Duration::from_millis(30));
        let early = clock.schedule(Duration::from_millis(10));
        assert_eq!(clock.advance(Duration::from_millis(50)), vec![early, late]);
        assert_eq!(clock.now(), Duration::from_millis(50));
    }

    #[test]
    fn ids_are_unique() {
        let mut clock = ManualScheduler::new();
        let a = clock.schedule(Duration::ZERO);
        let b = clock.schedule(Duration::ZERO);
        assert_ne!(a, b);
        assert_eq!(a.to_string(), format!("timer#{}", a.get()));
    }

    #[cfg(feature = "async")]
    mod tokio_tests {
        use super::super::*;
        use futures::StreamExt;

        #[tokio::test]
        async fn delivers_fired_id() {
            let (mut timers, mut fired) = TokioScheduler::new().expect("runtime");
            let id = timers.schedule(Duration::from_millis(5));
            assert_eq!(fired.next().await, Some(id));
        }

        #[tokio::test]
        async fn cancelled_timer_is_not_delivered() {
            let (mut timers, mut fired) = TokioScheduler::new().expect("runtime");
            let first = timers.schedule(Duration::from_millis(20));
            let second = timers.schedule(Duration::from_millis(40));
            assert!(timers.cancel(first));
            assert_eq!(fired.next().await, Some(second));
        }

        #[test]
        fn new_outside_runtime_is_an_error() {
            assert!(TokioScheduler::new().is_err());
        }
    }
}
