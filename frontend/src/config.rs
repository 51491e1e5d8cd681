//! Optional TOML configuration, read from the platform config directory
//! (`~/.config/faceplate/config.toml` on Linux). Missing or malformed
//! files fall back to defaults; configuration can never stop the frontend
//! from starting.

use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Directory holding overlay art, `controller_base.png` and
    /// `default.png`.
    pub asset_dir: Option<PathBuf>,

    /// Whether to publish the composited workspace (default) or the plain
    /// console frame.
    pub workspace: Option<bool>,
}

pub fn load() -> Config {
    let Some(path) = dirs::config_dir().map(|d| d.join("faceplate").join("config.toml")) else {
        return Config::default();
    };
    let Ok(text) = std::fs::read_to_string(&path) else {
        return Config::default();
    };
    match toml::from_str(&text) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config");
            Config::default()
        }
    }
}

/// Default art location when neither the CLI nor the config names one.
pub fn default_asset_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("faceplate")
        .join("overlays")
}
