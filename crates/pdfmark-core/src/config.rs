use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::store::DEFAULT_COLOR;

/// UI theme preference, persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Parses "dark" or "light", case-insensitive.
    pub fn parse(s: &str) -> Option<Theme> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }
}

/// Global configuration loaded from `~/.config/pdfmark/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfmarkConfig {
    /// Theme preference: "dark" (default) or "light".
    #[serde(default)]
    pub theme: Theme,
    /// Color applied to new bookmarks when none is given.
    #[serde(default = "default_color")]
    pub default_color: String,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl Default for PdfmarkConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            default_color: default_color(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pdfmark")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PdfmarkConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PdfmarkConfig::default();
        save(&default_cfg)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: PdfmarkConfig = toml::from_str(&data)?;
    Ok(cfg)
}

/// Write configuration back to disk (used by theme changes).
pub fn save(cfg: &PdfmarkConfig) -> Result<()> {
    let path = config_path()?;
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, toml)?;
    Ok(())
}
