//! Wire types mirrored from the backend's JSON, plus the API error and the
//! [`RunsApi`] seam the views depend on.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by backend API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// A URL could not be built from the base URL and path.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request never produced a response.
    #[error("request to {path} failed: {message}")]
    Request { path: String, message: String },

    /// The backend answered with a non-success status.
    #[error("{path} returned HTTP {status}: {body}")]
    Status { path: String, status: u16, body: String },

    /// The response body could not be deserialized.
    #[error("response from {path} could not be decoded: {message}")]
    Decode { path: String, message: String },
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

// =============================================================================
// RUNS
// =============================================================================

/// One row of `GET /runs`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub run_id: String,
    #[serde(default)]
    pub prompt: String,
    pub status: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<String>,
    /// Wall-clock seconds, when the backend reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

/// The original submission echoed back inside a [`RunDetail`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunInputs {
    #[serde(default)]
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood_image: Option<String>,
}

/// A generated output file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// MIME-ish type string such as `image/png`, `image` or `video/mp4`.
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// `GET /runs/{id}` and the cancel/finalize responses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunDetail {
    pub run_id: String,
    pub status: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default)]
    pub inputs: RunInputs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<Vec<Artifact>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logs_url: Option<String>,
}

impl RunDetail {
    pub fn artifacts(&self) -> &[Artifact] {
        self.artifacts.as_deref().unwrap_or_default()
    }
}

// =============================================================================
// SUBMISSION
// =============================================================================

/// JSON body for `POST /generate`. Absent optionals are omitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRunRequest {
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood_image: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRunResponse {
    pub run_id: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_id: Option<String>,
    /// Set when the run was created but generation could not be started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A file attached to a multipart submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Multipart body for `POST /generate`: a recipe path plus any files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadRequest {
    pub recipe_path: String,
    pub files: Vec<UploadFile>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Health {
    #[serde(default)]
    pub ok: bool,
}

// =============================================================================
// RUNS API TRAIT
// =============================================================================

/// The backend calls the views make. Enables mocking in tests.
#[async_trait::async_trait]
pub trait RunsApi: Send + Sync {
    /// `POST /generate` with a JSON body.
    async fn create_run(&self, request: &CreateRunRequest) -> Result<CreateRunResponse, ApiError>;

    /// `POST /generate` with a multipart body.
    async fn create_run_upload(&self, upload: &UploadRequest) -> Result<CreateRunResponse, ApiError>;

    /// `GET /runs`.
    async fn list_runs(&self) -> Result<Vec<Run>, ApiError>;

    /// `GET /runs/{id}`.
    async fn get_run(&self, run_id: &str) -> Result<RunDetail, ApiError>;

    /// `POST /runs/{id}/cancel`.
    async fn cancel_run(&self, run_id: &str) -> Result<RunDetail, ApiError>;

    /// `POST /finalize/{id}`.
    async fn finalize_run(&self, run_id: &str) -> Result<RunDetail, ApiError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
