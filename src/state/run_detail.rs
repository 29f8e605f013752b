#[cfg(test)]
#[path = "run_detail_test.rs"]
mod run_detail_test;

use crate::net::types::RunDetail;
use crate::util::timestamp;

// Side effects (finalize, cancel) key off the exact backend labels. Legacy
// aliases and other casings only affect the pill color.
const PENDING: &str = "PENDING";
const RUNNING: &str = "RUNNING";
const COMPLETED: &str = "COMPLETED";

/// What the detail view should show right now.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DetailPhase<'a> {
    Loading,
    NotFound,
    Ready(&'a RunDetail),
}

/// State of the run detail view.
#[derive(Clone, Debug)]
pub struct RunDetailState {
    pub run: Option<RunDetail>,
    /// True until the first fetch settles.
    pub loading: bool,
    /// A finalize call is in flight for this view.
    pub finalizing: bool,
}

impl Default for RunDetailState {
    fn default() -> Self {
        Self { run: None, loading: true, finalizing: false }
    }
}

impl RunDetailState {
    pub fn phase(&self) -> DetailPhase<'_> {
        match (&self.run, self.loading) {
            (Some(run), _) => DetailPhase::Ready(run),
            (None, true) => DetailPhase::Loading,
            (None, false) => DetailPhase::NotFound,
        }
    }

    pub fn set_run(&mut self, run: RunDetail) {
        self.run = Some(run);
        self.loading = false;
    }

    /// A failed fetch keeps the last good detail.
    pub fn fetch_failed(&mut self) {
        self.loading = false;
    }

    /// RUNNING without a finish time, and no finalize already in flight.
    pub fn needs_finalize(&self) -> bool {
        !self.finalizing
            && self
                .run
                .as_ref()
                .is_some_and(|run| run.status == RUNNING && run.finished_at.is_none())
    }

    /// Claim the finalize slot. Returns `false` when finalize is not needed
    /// or another tick already holds the slot.
    pub fn begin_finalize(&mut self) -> bool {
        if !self.needs_finalize() {
            return false;
        }
        self.finalizing = true;
        true
    }

    /// Release the finalize slot, applying the backend's answer if any.
    pub fn finish_finalize(&mut self, finalized: Option<RunDetail>) {
        self.finalizing = false;
        if let Some(run) = finalized {
            self.set_run(run);
        }
    }

    /// Cancel is offered for exactly PENDING or RUNNING runs while no finalize
    /// is in flight.
    pub fn can_cancel(&self) -> bool {
        !self.finalizing && self.run.as_ref().is_some_and(|run| matches!(run.status.as_str(), PENDING | RUNNING))
    }

    /// `"{n}s"` once finished, otherwise `"In progress..."`.
    pub fn duration_label(&self) -> String {
        let Some(run) = &self.run else {
            return String::new();
        };
        match &run.finished_at {
            Some(finished) => timestamp::elapsed_secs(&run.created_at, finished)
                .map_or_else(|| "-".to_owned(), |secs| format!("{secs}s")),
            None => "In progress...".to_owned(),
        }
    }

    /// Placeholder text for a run with no artifacts.
    pub fn empty_assets_message(&self) -> &'static str {
        let completed = self
            .run
            .as_ref()
            .is_some_and(|run| run.status == COMPLETED);
        if completed {
            "No assets generated"
        } else {
            "Assets will appear here when generation completes"
        }
    }
}
