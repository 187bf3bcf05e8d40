//! Per-directory file transitions: install and revert.
//!
//! Both operations keep exactly one backup generation next to the live theme
//! file. Status lines are emitted through the sink right before each step so
//! the console shows progress as it happens.

use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::error::InstallError;
use crate::ui::render::RenderSink;

use super::lock::is_locked;
use super::TargetDir;

/// Appended to the backup path while the reverted theme is staged.
pub const STAGING_SUFFIX: &str = ".tmp";

/// What `install` did to one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallOutcome {
    /// A previous theme file existed and was copied to the backup.
    pub backed_up: bool,
}

/// Back up the live theme file (if any) and write `content` in its place.
pub fn install(
    target: &TargetDir,
    content: &str,
    sink: &dyn RenderSink,
) -> Result<InstallOutcome, InstallError> {
    let theme = target.theme_path();
    let backup = target.backup_path();
    let name = target.theme_file_name();
    let existed = theme.exists();

    if existed {
        if is_locked(&theme) {
            return Err(InstallError::Locked(theme));
        }
        sink.status(&format!("Backing up old \"{name}\" file..."));
        fs::copy(&theme, &backup).map_err(|e| InstallError::io(&backup, e))?;
    }

    let verb = if existed { "Overwriting" } else { "Creating" };
    sink.status(&format!("{verb} \"{name}\" file..."));
    fs::write(&theme, content).map_err(|e| InstallError::io(&theme, e))?;

    info!(path = %theme.display(), backed_up = existed, "theme installed");
    Ok(InstallOutcome { backed_up: existed })
}

/// Swap the live theme file with its backup.
///
/// Fails with `NoBackup` before touching anything when the backup is absent.
/// The live file is staged next to the backup before the backup is copied
/// over it. Until the staged file is renamed into place it still holds the
/// live content, so no failure can lose it.
pub fn revert(target: &TargetDir, sink: &dyn RenderSink) -> Result<(), InstallError> {
    let theme = target.theme_path();
    let backup = target.backup_path();
    let name = target.theme_file_name();

    if !backup.exists() {
        return Err(InstallError::NoBackup(backup));
    }

    let custom = fs::read(&theme).map_err(|e| InstallError::io(&theme, e))?;
    if is_locked(&theme) {
        return Err(InstallError::Locked(theme));
    }

    let mut staged = backup.clone().into_os_string();
    staged.push(STAGING_SUFFIX);
    let staged = PathBuf::from(staged);
    fs::write(&staged, custom).map_err(|e| InstallError::io(&staged, e))?;

    sink.status(&format!("Restoring old \"{name}\" file..."));
    if let Err(e) = fs::copy(&backup, &theme) {
        let _ = fs::remove_file(&staged);
        return Err(InstallError::io(&theme, e));
    }

    sink.status(&format!("Backing up custom \"{name}\" file..."));
    fs::rename(&staged, &backup).map_err(|e| InstallError::io(&backup, e))?;

    info!(path = %theme.display(), "theme reverted");
    Ok(())
}
