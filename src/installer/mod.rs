//! Theme installer: discover Dreamweaver profile directories and apply one
//! file transition to them.
//!
//! The installer is a function of (root, layout, operation, content) plus the
//! filesystem. It never touches console state; all user-visible progress goes
//! through a [`RenderSink`].
//!
//! Loop semantics differ between the two operations:
//! - install visits every discovered target and keeps going after a
//!   per-target failure;
//! - revert handles only the first target in enumeration order and stops
//!   there, whether it succeeded, failed, or had no backup.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::InstallError;
use crate::ui::render::RenderSink;

mod discover;
pub mod lock;
mod ops;

pub use discover::discover_targets;
pub use ops::{install, revert, InstallOutcome};

/// Suffix appended to the theme file name to form its backup.
pub const BACKUP_SUFFIX: &str = ".bak";

/// Fixed names that locate theme files below the search root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeLayout {
    /// Directory name that marks one profile (`CodeColoring`).
    pub marker_dir: String,
    /// Live theme file name inside each marker directory (`Colors.xml`).
    pub theme_file: String,
}

impl Default for ThemeLayout {
    fn default() -> Self {
        Self {
            marker_dir: "CodeColoring".to_string(),
            theme_file: "Colors.xml".to_string(),
        }
    }
}

/// One discovered marker directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDir {
    dir: PathBuf,
    theme_file: String,
}

impl TargetDir {
    pub fn new(dir: impl Into<PathBuf>, theme_file: &str) -> Self {
        Self {
            dir: dir.into(),
            theme_file: theme_file.to_string(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn theme_file_name(&self) -> &str {
        &self.theme_file
    }

    /// `<dir>/Colors.xml`
    pub fn theme_path(&self) -> PathBuf {
        self.dir.join(&self.theme_file)
    }

    /// `<dir>/Colors.xml.bak`
    pub fn backup_path(&self) -> PathBuf {
        self.dir.join(format!("{}{BACKUP_SUFFIX}", self.theme_file))
    }
}

/// Which transition to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Install,
    Revert,
}

/// Outcome of one installer run across all discovered targets.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Number of marker directories found.
    pub discovered: usize,
    /// Targets whose transition completed.
    pub completed: usize,
    /// Per-target failures, in the order they happened.
    pub failures: Vec<InstallError>,
    /// Revert stopped because the first target had no backup.
    pub missing_backup: bool,
}

impl RunReport {
    /// True when no target reported an I/O or lock failure.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Discover targets under `root` and apply `operation` to them.
///
/// A missing root is returned as `Err(RootNotFound)` before anything is
/// touched. Everything that happens after discovery is folded into the
/// report instead.
pub fn run(
    root: &Path,
    layout: &ThemeLayout,
    operation: Operation,
    content: &str,
    sink: &dyn RenderSink,
) -> Result<RunReport, InstallError> {
    let targets = discover_targets(root, layout)?;
    debug!(root = %root.display(), count = targets.len(), ?operation, "targets discovered");
    let report = match operation {
        Operation::Install => install_all(&targets, content, sink),
        Operation::Revert => revert_first(&targets, sink),
    };
    Ok(report)
}

/// Install `content` into every target, continuing past failures.
pub fn install_all(targets: &[TargetDir], content: &str, sink: &dyn RenderSink) -> RunReport {
    let mut report = RunReport {
        discovered: targets.len(),
        ..RunReport::default()
    };
    for target in targets {
        match install(target, content, sink) {
            Ok(_) => report.completed += 1,
            Err(err) => {
                warn!(dir = %target.dir().display(), %err, "install failed");
                sink.error(&err.to_string());
                report.failures.push(err);
            }
        }
    }
    report
}

/// Revert the first target only.
///
/// Multiple profiles may exist, but only the first one in enumeration order
/// is swapped back. A missing backup prints "No backup exists." and stops.
pub fn revert_first(targets: &[TargetDir], sink: &dyn RenderSink) -> RunReport {
    let mut report = RunReport {
        discovered: targets.len(),
        ..RunReport::default()
    };
    let Some(target) = targets.first() else {
        return report;
    };
    match revert(target, sink) {
        Ok(()) => report.completed = 1,
        Err(InstallError::NoBackup(path)) => {
            debug!(backup = %path.display(), "revert aborted, no backup");
            sink.status("No backup exists.");
            report.missing_backup = true;
        }
        Err(err) => {
            warn!(dir = %target.dir().display(), %err, "revert failed");
            sink.error(&err.to_string());
            report.failures.push(err);
        }
    }
    if targets.len() > 1 {
        debug!(skipped = targets.len() - 1, "revert handles the first target only");
    }
    report
}
