//! Art path resolution: derives the candidate overlay path for a title
//! from the ROM filename, plus the shared controller-base and default
//! art locations.
//!
//! Only the primary candidate is built here; the loader itself walks the
//! alternate-extension → default → placeholder chain.

use std::path::{Path, PathBuf};

/// Primary overlay candidate for a ROM: `<asset_dir>/<rom stem>.png`.
pub fn overlay_candidate(asset_dir: &Path, rom_path: &Path) -> PathBuf {
    let stem = rom_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "default".to_string());
    asset_dir.join(format!("{stem}.png"))
}

/// The controller-base illustration shared across all titles.
pub fn base_candidate(asset_dir: &Path) -> PathBuf {
    asset_dir.join("controller_base.png")
}

/// The shared default art used when a title has no overlay of its own.
pub fn default_candidate(asset_dir: &Path) -> PathBuf {
    asset_dir.join("default.png")
}
