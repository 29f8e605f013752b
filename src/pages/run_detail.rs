//! Run detail page.
//!
//! DESIGN
//! ======
//! Each refresh fetches the run. A run that is RUNNING with no finish time
//! gets one `POST /finalize/{id}` as a side effect of the refresh; the
//! `finalizing` flag in [`RunDetailState`] keeps overlapping refreshes from
//! sending another while one is in flight. `load` and cancel never
//! finalize. The flag is claimed and released
//! under the state lock, which is never held across an `.await`.
//!
//! ERROR HANDLING
//! ==============
//! Fetch failures are logged and the last good detail stays on screen; a
//! run that never loaded renders as "Run not found". Finalize failures are
//! logged and release the flag so a later refresh can try again.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::{error, info, warn};

use super::{Mounted, lock};
use crate::components::{asset_grid, status_pill, style::Style};
use crate::net::types::{ApiError, RunsApi};
use crate::state::assets::AssetGridState;
use crate::state::run_detail::{DetailPhase, RunDetailState};
use crate::util::poll::spawn_poller;
use crate::util::timestamp;

#[derive(Clone)]
pub struct RunDetailPage {
    run_id: String,
    api: Arc<dyn RunsApi>,
    state: Arc<Mutex<RunDetailState>>,
}

impl RunDetailPage {
    pub fn new(run_id: impl Into<String>, api: Arc<dyn RunsApi>) -> Self {
        Self { run_id: run_id.into(), api, state: Arc::new(Mutex::new(RunDetailState::default())) }
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    pub fn snapshot(&self) -> RunDetailState {
        lock(&self.state).clone()
    }

    /// Fetch the run without the auto-finalize side effect. Returns `false`
    /// when the fetch failed.
    pub async fn load(&self) -> bool {
        match self.api.get_run(&self.run_id).await {
            Ok(run) => {
                lock(&self.state).set_run(run);
                true
            }
            Err(e) => {
                if e.is_not_found() {
                    warn!(run_id = %self.run_id, "run not found");
                } else {
                    error!(run_id = %self.run_id, error = %e, "failed to load run");
                }
                lock(&self.state).fetch_failed();
                false
            }
        }
    }

    /// One poll tick: load, then finalize a RUNNING run with no finish time.
    pub async fn refresh(&self) {
        if !self.load().await {
            return;
        }
        let claimed = lock(&self.state).begin_finalize();
        if claimed {
            self.finalize().await;
        }
    }

    async fn finalize(&self) {
        info!(run_id = %self.run_id, "auto-finalizing run");
        let finalized = match self.api.finalize_run(&self.run_id).await {
            Ok(run) => Some(run),
            Err(e) => {
                error!(run_id = %self.run_id, error = %e, "auto-finalize failed");
                None
            }
        };
        lock(&self.state).finish_finalize(finalized);
    }

    /// Cancel the run if it is still cancellable, then reload it.
    ///
    /// Returns `Ok(false)` without calling the backend when cancel is not
    /// offered for the current state.
    pub async fn cancel(&self) -> Result<bool, ApiError> {
        if !lock(&self.state).can_cancel() {
            return Ok(false);
        }
        if let Err(e) = self.api.cancel_run(&self.run_id).await {
            error!(run_id = %self.run_id, error = %e, "failed to cancel run");
            return Err(e);
        }
        info!(run_id = %self.run_id, "run cancelled");
        self.load().await;
        Ok(true)
    }

    /// Refresh now and every `period`, calling `render` after each refresh
    /// while the page stays mounted.
    pub fn mount<R>(&self, period: Duration, render: R) -> Mounted
    where
        R: Fn(&RunDetailState) + Send + Sync + 'static,
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

/// Full page text for one run.
pub fn render(run_id: &str, state: &RunDetailState, grid: &AssetGridState, style: Style) -> String {
    let run = match state.phase() {
        DetailPhase::Loading => return "Loading run details...\n".to_owned(),
        DetailPhase::NotFound => return "Run not found\n".to_owned(),
        DetailPhase::Ready(run) => run,
    };

    let mut out = format!("Run {run_id}\n");
    let mut header = vec![
        status_pill::render(&run.status, style),
        format!("Created: {}", timestamp::format_datetime(&run.created_at)),
    ];
    if let Some(finished) = &run.finished_at {
        header.push(format!("Finished: {}", timestamp::format_datetime(finished)));
    }
    if state.finalizing {
        header.push(style.tone("Finalizing...", crate::state::status::StatusTone::Active));
    }
    out.push_str(&header.join("  "));
    out.push('\n');
    if state.can_cancel() {
        out.push_str(&style.dim(&format!("Cancel with: adgen cancel {run_id}")));
        out.push('\n');
    }

    out.push_str("\nRun Details\n");
    out.push_str(&format!("  Prompt:          {}\n", run.inputs.prompt));
    if let Some(negative) = run.inputs.negative_prompt.as_deref().filter(|s| !s.is_empty()) {
        out.push_str(&format!("  Negative Prompt: {negative}\n"));
    }
    if let Some(seed) = run.inputs.seed.filter(|seed| *seed != 0) {
        out.push_str(&format!("  Seed:            {seed}\n"));
    }
    out.push_str(&format!("  Duration:        {}\n", state.duration_label()));
    if let Some(logs) = &run.logs_url {
        out.push_str(&format!("  Logs:            {logs}\n"));
    }

    out.push_str("\nGenerated Assets\n");
    if run.artifacts().is_empty() {
        out.push_str(&format!("  {}\n", state.empty_assets_message()));
    } else {
        out.push_str(&asset_grid::render(run.artifacts(), grid, style));
    }
    out
}

#[cfg(test)]
#[path = "run_detail_test.rs"]
mod tests;
