//! In-memory `RunsApi` for page tests.

use std::sync::Mutex;

use tokio::sync::Semaphore;

use crate::net::types::{
    ApiError, CreateRunRequest, CreateRunResponse, Run, RunDetail, RunInputs, RunsApi, UploadRequest,
};

pub(crate) fn run(id: &str, status: &str) -> Run {
    Run {
        run_id: id.into(),
        prompt: format!("prompt {id}"),
        status: status.into(),
        created_at: "2025-03-01T10:00:00Z".into(),
        finished_at: None,
        duration: None,
    }
}

pub(crate) fn detail(status: &str, finished_at: Option<&str>) -> RunDetail {
    RunDetail {
        run_id: "run-1".into(),
        status: status.into(),
        created_at: "2025-03-01T10:00:00Z".into(),
        finished_at: finished_at.map(Into::into),
        prompt: None,
        duration: None,
        inputs: RunInputs { prompt: "citrus soda on a beach".into(), ..RunInputs::default() },
        artifacts: None,
        logs_url: None,
    }
}

fn server_error(path: &str) -> ApiError {
    ApiError::Status { path: path.into(), status: 500, body: "mock failure".into() }
}

#[derive(Default)]
pub(crate) struct MockApi {
    calls: Mutex<Vec<String>>,
    pub(crate) runs: Mutex<Option<Vec<Run>>>,
    pub(crate) detail: Mutex<Option<RunDetail>>,
    pub(crate) finalized: Mutex<Option<RunDetail>>,
    pub(crate) cancelled: Mutex<Option<RunDetail>>,
    pub(crate) created: Mutex<Option<CreateRunResponse>>,
    pub(crate) create_requests: Mutex<Vec<CreateRunRequest>>,
    pub(crate) uploads: Mutex<Vec<UploadRequest>>,
    finalize_gate: Option<Semaphore>,
}

impl MockApi {
    pub(crate) fn with_runs(self, runs: Vec<Run>) -> Self {
        *self.runs.lock().unwrap() = Some(runs);
        self
    }

    pub(crate) fn with_detail(self, detail: RunDetail) -> Self {
        *self.detail.lock().unwrap() = Some(detail);
        self
    }

    pub(crate) fn with_finalized(self, detail: RunDetail) -> Self {
        *self.finalized.lock().unwrap() = Some(detail);
        self
    }

    pub(crate) fn with_cancelled(self, detail: RunDetail) -> Self {
        *self.cancelled.lock().unwrap() = Some(detail);
        self
    }

    pub(crate) fn with_created(self, response: CreateRunResponse) -> Self {
        *self.created.lock().unwrap() = Some(response);
        self
    }

    /// Make `finalize_run` block until [`MockApi::release_finalize`].
    pub(crate) fn gated_finalize(mut self) -> Self {
        self.finalize_gate = Some(Semaphore::new(0));
        self
    }

    pub(crate) fn release_finalize(&self) {
        if let Some(gate) = &self.finalize_gate {
            gate.add_permits(1);
        }
    }

    pub(crate) fn count(&self, call: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| c.as_str() == call).count()
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_owned());
    }
}

#[async_trait::async_trait]
impl RunsApi for MockApi {
    async fn create_run(&self, request: &CreateRunRequest) -> Result<CreateRunResponse, ApiError> {
        self.record("create_run");
        self.create_requests.lock().unwrap().push(request.clone());
        self.created.lock().unwrap().clone().ok_or_else(|| server_error("/generate"))
    }

    async fn create_run_upload(&self, upload: &UploadRequest) -> Result<CreateRunResponse, ApiError> {
        self.record("create_run_upload");
        self.uploads.lock().unwrap().push(upload.clone());
        self.created.lock().unwrap().clone().ok_or_else(|| server_error("/generate"))
    }

    async fn list_runs(&self) -> Result<Vec<Run>, ApiError> {
        self.record("list_runs");
        self.runs.lock().unwrap().clone().ok_or_else(|| server_error("/runs"))
    }

    async fn get_run(&self, run_id: &str) -> Result<RunDetail, ApiError> {
        self.record("get_run");
        self.detail.lock().unwrap().clone().ok_or_else(|| ApiError::Status {
            path: format!("/runs/{run_id}"),
            status: 404,
            body: "Run not found".into(),
        })
    }

    async fn cancel_run(&self, run_id: &str) -> Result<RunDetail, ApiError> {
        self.record("cancel_run");
        let cancelled = self.cancelled.lock().unwrap().clone();
        match cancelled {
            Some(detail) => {
                *self.detail.lock().unwrap() = Some(detail.clone());
                Ok(detail)
            }
            None => Err(server_error(&format!("/runs/{run_id}/cancel"))),
        }
    }

    async fn finalize_run(&self, run_id: &str) -> Result<RunDetail, ApiError> {
        self.record("finalize_run");
        if let Some(gate) = &self.finalize_gate {
            gate.acquire().await.unwrap().forget();
        }
        self.finalized
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| server_error(&format!("/finalize/{run_id}")))
    }
}
