//! Configuration data model.
//!
//! Struct/enum definitions plus default values only. Source discovery and
//! validation live in `sources` and `loader`.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::installer::ThemeLayout;

use super::defaults::{
    DEFAULT_LAUNCH_COMMAND, DEFAULT_MARKER_DIR, DEFAULT_THEME_FILE, DEFAULT_VENDOR_DIR,
};

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub display: DisplayConfig,
    pub launch: LaunchConfig,
    pub prompts: PromptsConfig,
}

impl Config {
    /// Fixed names used to find and rewrite theme files.
    pub fn layout(&self) -> ThemeLayout {
        ThemeLayout {
            marker_dir: self.paths.marker_dir.clone(),
            theme_file: self.paths.theme_file.clone(),
        }
    }

    /// Directory searched for marker directories.
    ///
    /// An explicit `paths.root` wins; otherwise the vendor folder is joined
    /// onto `app_data` (the platform's roaming config dir).
    pub fn search_root(&self, app_data: Option<&Path>) -> Option<PathBuf> {
        if let Some(root) = &self.paths.root {
            return Some(root.clone());
        }
        app_data.map(|dir| dir.join(&self.paths.vendor_dir))
    }
}

/// Where theme files live.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Full override of the searched directory (vendor folder included).
    pub root: Option<PathBuf>,
    pub vendor_dir: String,
    pub marker_dir: String,
    pub theme_file: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            root: None,
            vendor_dir: DEFAULT_VENDOR_DIR.to_string(),
            marker_dir: DEFAULT_MARKER_DIR.to_string(),
            theme_file: DEFAULT_THEME_FILE.to_string(),
        }
    }
}

/// Display / rendering preferences.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// External application launch after a completed run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    pub enabled: bool,
    pub command: String,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: DEFAULT_LAUNCH_COMMAND.to_string(),
        }
    }
}

/// Interactive keypress waits.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PromptsConfig {
    pub pause: bool,
}

impl Default for PromptsConfig {
    fn default() -> Self {
        Self { pause: true }
    }
}
