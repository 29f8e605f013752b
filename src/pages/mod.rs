//! Screens: each page owns its view state, talks to the backend through
//! [`RunsApi`](crate::net::types::RunsApi) and, when mounted, refreshes on a
//! timer until torn down.

pub mod new_run;
pub mod run_detail;
pub mod runs;

#[cfg(test)]
pub(crate) mod test_helpers;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::util::poll::PollHandle;

/// A mounted page. Dropping it stops polling and suppresses renders from
/// requests that were still in flight.
#[derive(Debug)]
pub struct Mounted {
    _poll: PollHandle,
    mounted: Arc<AtomicBool>,
}

impl Mounted {
    pub(crate) fn new(poll: PollHandle, mounted: Arc<AtomicBool>) -> Self {
        Self { _poll: poll, mounted }
    }

    /// Tear the page down. Equivalent to dropping it.
    pub fn unmount(self) {}
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.mounted.store(false, Ordering::SeqCst);
    }
}

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
