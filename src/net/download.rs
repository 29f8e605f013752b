//! Save artifacts and run bundles to disk.
//!
//! The browser triggers a native download with the artifact's filename;
//! here that becomes a file written under a target directory.

use std::path::{Path, PathBuf};

use tracing::info;

use super::api::ApiClient;
use super::types::{ApiError, Artifact};
use crate::state::assets::download_name;

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: std::io::Error },
}

/// Fetch one artifact and write it into `dir`. Returns the written path.
pub async fn download_artifact(client: &ApiClient, artifact: &Artifact, dir: &Path) -> Result<PathBuf, DownloadError> {
    let bytes = client.fetch_bytes(&artifact.url).await?;
    let path = dir.join(safe_file_name(download_name(artifact)));
    write_file(&path, &bytes).await?;
    info!(path = %path.display(), bytes = bytes.len(), "artifact saved");
    Ok(path)
}

/// Fetch the zip bundle for a run and write it to `path`.
pub async fn download_bundle(client: &ApiClient, run_id: &str, path: &Path) -> Result<usize, DownloadError> {
    let bytes = client.download_bundle(run_id).await?;
    write_file(path, &bytes).await?;
    info!(path = %path.display(), bytes = bytes.len(), "bundle saved");
    Ok(bytes.len())
}

/// Keep only the final path component so a backend filename cannot escape
/// the target directory.
pub fn safe_file_name(raw: &str) -> String {
    let name = raw.rsplit(['/', '\\']).next().unwrap_or_default().trim();
    if name.is_empty() || name == "." || name == ".." {
        "asset".to_owned()
    } else {
        name.to_owned()
    }
}

async fn write_file(path: &Path, bytes: &[u8]) -> Result<(), DownloadError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| DownloadError::Write { path: parent.to_path_buf(), source })?;
    }
    tokio::fs::write(path, bytes)
        .await
        .map_err(|source| DownloadError::Write { path: path.to_path_buf(), source })
}

#[cfg(test)]
#[path = "download_test.rs"]
mod tests;
