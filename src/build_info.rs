//! Compile-time build metadata shown in the console title, banner, and `--version`.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Human-facing application title.
pub const TITLE: &str = "Dreamweaver Colorizer";

/// VCS commit hash captured at build time.
pub const GIT_COMMIT: &str = env!("DWC_BUILD_GIT_HASH");

/// Build timestamp captured at compile time.
pub const BUILD_TIMESTAMP: &str = env!("DWC_BUILD_TIMESTAMP");

/// Application identity handed to the CLI shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppInfo {
    pub title: &'static str,
    pub version: &'static str,
}

impl AppInfo {
    /// Identity of this build.
    pub const fn current() -> Self {
        Self {
            title: TITLE,
            version: VERSION,
        }
    }

    /// Console window title, e.g. `Dreamweaver Colorizer v1.0.0`.
    pub fn console_title(&self) -> String {
        format!("{} v{}", self.title, self.version)
    }
}

/// Render CLI version block used by `dwc --version`.
pub fn cli_version_text() -> String {
    format!("dwc {VERSION}\ncommit: {GIT_COMMIT}\nbuilt: {BUILD_TIMESTAMP}")
}
