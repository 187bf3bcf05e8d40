//! Best-effort "is this file held open?" probe.

use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::Path;

/// Return `true` when `path` exists but cannot be opened for writing.
///
/// On Windows this catches sharing violations from a running Dreamweaver.
/// Elsewhere it mostly reports permission problems. A missing file is never
/// locked.
pub fn is_locked(path: &Path) -> bool {
    match OpenOptions::new().read(true).write(true).open(path) {
        Ok(_) => false,
        Err(e) if e.kind() == ErrorKind::NotFound => false,
        Err(_) => true,
    }
}
