//! Scratch directories for tests that touch the filesystem.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::installer::TargetDir;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Per-test directory under the system temp dir, removed on drop.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    pub fn new(label: &str) -> Self {
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!("dwc-{label}-{}-{id}", std::process::id()));
        // Leftovers from an aborted run with the same pid.
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).expect("create test dir");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write `content` at `relative`, creating parent directories.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, content).expect("write test file");
        path
    }

    /// Create `<relative>/CodeColoring` and return it as an install target.
    pub fn target(&self, relative: &str) -> TargetDir {
        let dir = self.child(relative).join("CodeColoring");
        fs::create_dir_all(&dir).expect("create marker dir");
        TargetDir::new(dir, "Colors.xml")
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}
