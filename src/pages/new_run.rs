//! New run page: validate the form, create the run, then navigate to it.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::{error, info, warn};

use super::lock;
use crate::app::Route;
use crate::net::types::{ApiError, CreateRunResponse, RunsApi, UploadRequest};
use crate::state::run_form::{FormError, RunForm};
use crate::state::toast::{Toast, ToastSlot};

pub const CREATED_MESSAGE: &str = "Run created successfully!";
pub const FAILED_MESSAGE: &str = "Failed to create run";

/// Result of one submit attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The run exists; navigate to `route`.
    Created { route: Route, response: CreateRunResponse },
    /// The form did not validate; nothing was sent.
    Rejected(FormError),
    /// Another submission is still in flight; nothing was sent.
    Busy,
    /// The backend call failed.
    Failed(ApiError),
}

#[derive(Clone)]
pub struct NewRunPage {
    api: Arc<dyn RunsApi>,
    submitting: Arc<AtomicBool>,
    toast: Arc<Mutex<ToastSlot>>,
    toast_ttl: Duration,
}

impl NewRunPage {
    pub fn new(api: Arc<dyn RunsApi>, toast_ttl: Duration) -> Self {
        Self {
            api,
            submitting: Arc::new(AtomicBool::new(false)),
            toast: Arc::new(Mutex::new(ToastSlot::default())),
            toast_ttl,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    /// The toast currently on screen, if it has not expired.
    pub fn toast(&self) -> Option<Toast> {
        lock(&self.toast).current().cloned()
    }

    pub fn dismiss_toast(&self) {
        lock(&self.toast).dismiss();
    }

    /// Submit the JSON form.
    pub async fn submit(&self, form: &RunForm) -> SubmitOutcome {
        let request = match form.to_request() {
            Ok(request) => request,
            Err(e) => return SubmitOutcome::Rejected(e),
        };
        let api = Arc::clone(&self.api);
        self.run_submission(async move { api.create_run(&request).await }).await
    }

    /// Submit a recipe path plus uploaded files as multipart.
    pub async fn submit_upload(&self, upload: UploadRequest) -> SubmitOutcome {
        let api = Arc::clone(&self.api);
        self.run_submission(async move { api.create_run_upload(&upload).await }).await
    }

    async fn run_submission<F>(&self, call: F) -> SubmitOutcome
    where
        F: Future<Output = Result<CreateRunResponse, ApiError>>,
    {
        if self.submitting.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst).is_err() {
            return SubmitOutcome::Busy;
        }

        let outcome = match call.await {
            Ok(response) => {
                if let Some(reason) = &response.error {
                    warn!(run_id = %response.run_id, %reason, "run created but generation did not start");
                }
                info!(run_id = %response.run_id, status = %response.status, "run created");
                self.show(Toast::success(CREATED_MESSAGE, self.toast_ttl));
                SubmitOutcome::Created { route: Route::RunDetail(response.run_id.clone()), response }
            }
            Err(e) => {
                error!(error = %e, "failed to create run");
                self.show(Toast::error(FAILED_MESSAGE, self.toast_ttl));
                SubmitOutcome::Failed(e)
            }
        };

        self.submitting.store(false, Ordering::SeqCst);
        outcome
    }

    fn show(&self, toast: Toast) {
        lock(&self.toast).show(toast);
    }
}

#[cfg(test)]
#[path = "new_run_test.rs"]
mod tests;
