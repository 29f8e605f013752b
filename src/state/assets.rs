#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

use crate::net::types::Artifact;

/// How an artifact is presented, decided from its type string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Video,
    Other,
}

impl AssetKind {
    pub fn classify(kind: &str) -> Self {
        if kind.starts_with("image/") || kind == "image" {
            Self::Image
        } else if kind.starts_with("video/") || kind == "video" {
            Self::Video
        } else {
            Self::Other
        }
    }
}

/// Filename, or `Asset {n}` with a 1-based index.
pub fn display_name(artifact: &Artifact, index: usize) -> String {
    match &artifact.filename {
        Some(name) if !name.is_empty() => name.clone(),
        _ => format!("Asset {}", index + 1),
    }
}

/// Name used when saving the artifact.
pub fn download_name(artifact: &Artifact) -> &str {
    artifact.filename.as_deref().filter(|name| !name.is_empty()).unwrap_or("asset")
}

/// Size in megabytes with two decimals; hidden when absent or zero.
#[allow(clippy::cast_precision_loss)]
pub fn size_label(size: Option<u64>) -> Option<String> {
    size.filter(|bytes| *bytes > 0)
        .map(|bytes| format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0))
}

/// Asset grid state: which image, if any, is open in the lightbox.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssetGridState {
    pub selected: Option<String>,
}

impl AssetGridState {
    /// Open the lightbox for an image artifact. Other kinds are ignored.
    pub fn open(&mut self, artifact: &Artifact) -> bool {
        if AssetKind::classify(&artifact.kind) != AssetKind::Image {
            return false;
        }
        self.selected = Some(artifact.url.clone());
        true
    }

    pub fn close(&mut self) {
        self.selected = None;
    }
}
