//! Fixed-period polling tied to a view's lifetime.
//!
//! DESIGN
//! ======
//! The first tick fires immediately, then once per period. Each tick runs
//! as its own task, so a slow request never delays the next tick and ticks
//! may overlap. Stopping (or dropping) the [`PollHandle`] ends the timer
//! loop; ticks already in flight are left to finish and their results are
//! applied or dropped by whoever owns the state.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Owns a running poll loop. Dropping it stops the loop.
#[derive(Debug)]
pub struct PollHandle {
    task: JoinHandle<()>,
}

impl PollHandle {
    /// Stop the loop. Equivalent to dropping the handle.
    pub fn stop(self) {}

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Call `tick` now and then every `period` until the handle is dropped.
///
/// # Panics
///
/// Panics if `period` is zero.
pub fn spawn_poller<F, Fut>(period: Duration, tick: F) -> PollHandle
where
    F: Fn() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            tokio::spawn(tick());
        }
    });
    PollHandle { task }
}

#[cfg(test)]
#[path = "poll_test.rs"]
mod tests;
