//! Generated asset list with an optional lightbox preview.

use super::style::Style;
use crate::net::types::Artifact;
use crate::state::assets::{AssetGridState, AssetKind, display_name, size_label};

pub fn render(artifacts: &[Artifact], grid: &AssetGridState, style: Style) -> String {
    let mut out = String::new();
    for (index, artifact) in artifacts.iter().enumerate() {
        let badge = match AssetKind::classify(&artifact.kind) {
            AssetKind::Image => "image",
            AssetKind::Video => "video",
            AssetKind::Other => "file",
        };
        let mut line = format!("  {}. {} [{badge}] {}", index + 1, style.bold(&display_name(artifact, index)), artifact.kind);
        if let Some(size) = size_label(artifact.size) {
            line.push_str(&format!("  {size}"));
        }
        out.push_str(&line);
        out.push('\n');
        out.push_str(&format!("     {}\n", style.dim(&artifact.url)));
    }

    if let Some(url) = &grid.selected {
        out.push_str(&format!("\nPreview: {url}\n"));
    }
    out
}
