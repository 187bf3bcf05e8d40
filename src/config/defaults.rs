//! Default configuration constants.
//!
//! The directory and file names mirror what Dreamweaver itself creates under
//! the per-user application-data folder.

/// Vendor folder under the per-user application-data directory.
pub(super) const DEFAULT_VENDOR_DIR: &str = "Adobe";
/// Directory name that marks one Dreamweaver profile's color settings.
pub(super) const DEFAULT_MARKER_DIR: &str = "CodeColoring";
/// Live theme file name inside each marker directory.
pub(super) const DEFAULT_THEME_FILE: &str = "Colors.xml";
/// Command handed to the platform launcher after a run.
pub(super) const DEFAULT_LAUNCH_COMMAND: &str = "dreamweaver";
/// Config file name looked up in the working directory and the config root.
pub(super) const CONFIG_FILE_NAME: &str = "dwc.toml";
/// Subdirectory of the platform config root that holds the global config.
pub(super) const CONFIG_DIR_NAME: &str = "dwc";
