//! REST client for the generation backend.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-2xx responses keep the
//! status code and the raw body text so call sites can log what the backend
//! said before falling back to a generic message. Nothing here retries.

use std::time::Duration;

use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::types::{
    ApiError, CreateRunRequest, CreateRunResponse, Health, Run, RunDetail, RunsApi, UploadRequest,
};
use crate::config::ClientConfig;

/// HTTP client bound to one backend base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Build a client from typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is unusable or the HTTP client fails
    /// to build.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.api_url).map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", config.api_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(config.api_url.clone()));
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build `{base}/{segments...}`, percent-encoding each segment.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Resolve an artifact URL that may be relative to the backend.
    pub fn resolve(&self, raw: &str) -> Result<Url, ApiError> {
        if let Ok(url) = Url::parse(raw) {
            return Ok(url);
        }
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }
        base.join(raw.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))
    }

    /// `GET /health`.
    pub async fn health(&self) -> Result<Health, ApiError> {
        let url = self.endpoint(&["health"])?;
        self.send_json(self.http.request(Method::GET, url.clone()), &url).await
    }

    /// `GET /download/{id}`: the zip bundle of a run's outputs.
    pub async fn download_bundle(&self, run_id: &str) -> Result<Vec<u8>, ApiError> {
        let url = self.endpoint(&["download", run_id])?;
        self.fetch_url(url).await
    }

    /// `DELETE /runs/{id}`.
    pub async fn delete_run(&self, run_id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["runs", run_id])?;
        self.send_raw(self.http.request(Method::DELETE, url.clone()), &url).await?;
        Ok(())
    }

    /// Fetch the raw bytes behind an artifact URL.
    pub async fn fetch_bytes(&self, raw_url: &str) -> Result<Vec<u8>, ApiError> {
        let url = self.resolve(raw_url)?;
        self.fetch_url(url).await
    }

    async fn fetch_url(&self, url: Url) -> Result<Vec<u8>, ApiError> {
        let response = self.send_raw(self.http.get(url.clone()), &url).await?;
        let bytes = response.bytes().await.map_err(|e| ApiError::Request {
            path: url.path().to_owned(),
            message: e.to_string(),
        })?;
        Ok(bytes.to_vec())
    }

    async fn send_raw(&self, request: reqwest::RequestBuilder, url: &Url) -> Result<reqwest::Response, ApiError> {
        let path = url.path().to_owned();
        debug!(%path, "backend request");
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Request { path: path.clone(), message: e.to_string() })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { path, status: status.as_u16(), body });
        }
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder, url: &Url) -> Result<T, ApiError> {
        let response = self.send_raw(request, url).await?;
        let path = url.path().to_owned();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Request { path: path.clone(), message: e.to_string() })?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode { path, message: e.to_string() })
    }

    async fn post_empty<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        let url = self.endpoint(segments)?;
        self.send_json(self.http.post(url.clone()), &url).await
    }
}

#[async_trait::async_trait]
impl RunsApi for ApiClient {
    async fn create_run(&self, request: &CreateRunRequest) -> Result<CreateRunResponse, ApiError> {
        let url = self.endpoint(&["generate"])?;
        self.send_json(self.http.post(url.clone()).json(request), &url).await
    }

    async fn create_run_upload(&self, upload: &UploadRequest) -> Result<CreateRunResponse, ApiError> {
        let url = self.endpoint(&["generate"])?;
        let mut form = reqwest::multipart::Form::new().text("recipe_path", upload.recipe_path.clone());
        for file in &upload.files {
            let part = reqwest::multipart::Part::bytes(file.bytes.clone()).file_name(file.filename.clone());
            form = form.part("files", part);
        }
        self.send_json(self.http.post(url.clone()).multipart(form), &url).await
    }

    async fn list_runs(&self) -> Result<Vec<Run>, ApiError> {
        let url = self.endpoint(&["runs"])?;
        self.send_json(self.http.get(url.clone()), &url).await
    }

    async fn get_run(&self, run_id: &str) -> Result<RunDetail, ApiError> {
        let url = self.endpoint(&["runs", run_id])?;
        self.send_json(self.http.get(url.clone()), &url).await
    }

    async fn cancel_run(&self, run_id: &str) -> Result<RunDetail, ApiError> {
        self.post_empty(&["runs", run_id, "cancel"]).await
    }

    async fn finalize_run(&self, run_id: &str) -> Result<RunDetail, ApiError> {
        self.post_empty(&["finalize", run_id]).await
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
