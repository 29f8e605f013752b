//! Run list page: fetch all runs, filter locally, refresh on a timer.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::error;

use super::{Mounted, lock};
use crate::components::{run_table, style::Style};
use crate::net::types::RunsApi;
use crate::state::run_list::{RunListState, StatusFilter};
use crate::util::poll::spawn_poller;

#[derive(Clone)]
pub struct RunsPage {
    api: Arc<dyn RunsApi>,
    state: Arc<Mutex<RunListState>>,
}

impl RunsPage {
    pub fn new(api: Arc<dyn RunsApi>) -> Self {
        Self { api, state: Arc::new(Mutex::new(RunListState::default())) }
    }

    pub fn snapshot(&self) -> RunListState {
        lock(&self.state).clone()
    }

    pub fn set_filter(&self, filter: StatusFilter) {
        lock(&self.state).filter = filter;
    }

    pub async fn refresh(&self) {
        match self.api.list_runs().await {
            Ok(runs) => lock(&self.state).set_runs(runs),
            Err(e) => {
                error!(error = %e, "failed to load runs");
                lock(&self.state).fetch_failed();
            }
        }
    }

    /// Refresh now and every `period`, calling `render` after each refresh
    /// while the page stays mounted.
    pub fn mount<R>(&self, period: Duration, render: R) -> Mounted
    where
        R: Fn(&RunListState) + Send + Sync + 'static,
    {
        let mounted = Arc::new(AtomicBool::new(true));
        let render = Arc::new(render);
        let page = self.clone();
        let alive = Arc::clone(&mounted);
        let poll = spawn_poller(period, move || {
            let page = page.clone();
            let render = Arc::clone(&render);
            let alive = Arc::clone(&alive);
            async move {
                page.refresh().await;
                if alive.load(Ordering::SeqCst) {
                    render(&page.snapshot());
                }
            }
        });
        Mounted::new(poll, mounted)
    }
}

/// Full page text: heading, filter bar, then the table.
pub fn render(state: &RunListState, style: Style) -> String {
    let mut out = String::from("Advertisement Runs\n\nFilter:");
    for filter in StatusFilter::ALL {
        let name = filter.name();
        if filter == state.filter {
            out.push_str(&format!(" [{}]", style.bold(name)));
        } else {
            out.push_str(&format!("  {name} "));
        }
    }
    out.push_str("\n\n");
    out.push_str(&run_table::render(&state.filtered(), state.loading, style));
    out
}

#[cfg(test)]
#[path = "runs_test.rs"]
mod tests;
