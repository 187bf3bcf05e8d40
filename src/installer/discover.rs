//! Recursive discovery of per-profile marker directories.

use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::error::InstallError;

use super::{TargetDir, ThemeLayout};

/// Find every directory under `root` named `layout.marker_dir`.
///
/// Results keep the underlying enumeration order and are not sorted. Nested
/// matches are returned too. Unreadable subtrees are skipped.
pub fn discover_targets(root: &Path, layout: &ThemeLayout) -> Result<Vec<TargetDir>, InstallError> {
    if !root.is_dir() {
        return Err(InstallError::RootNotFound(root.to_path_buf()));
    }

    let mut targets = Vec::new();
    for entry in WalkDir::new(root).min_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!(%err, "skipping unreadable entry during discovery");
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if marker_matches(name, &layout.marker_dir) {
            debug!(path = %entry.path().display(), "found target directory");
            targets.push(TargetDir::new(entry.into_path(), &layout.theme_file));
        }
    }
    Ok(targets)
}

/// Windows directory names compare case-insensitively.
fn marker_matches(name: &str, marker: &str) -> bool {
    if cfg!(windows) {
        name.eq_ignore_ascii_case(marker)
    } else {
        name == marker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::TestTempDir;
    use std::fs;

    #[test]
    fn missing_root_is_a_precondition_failure() {
        let tmp = TestTempDir::new("discover-missing");
        let root = tmp.child("Adobe");
        let err = discover_targets(&root, &ThemeLayout::default()).unwrap_err();
        assert!(matches!(err, InstallError::RootNotFound(path) if path == root));
    }

    #[test]
    fn root_that_is_a_file_is_not_found() {
        let tmp = TestTempDir::new("discover-file-root");
        let root = tmp.write_text("Adobe", "not a directory");
        let err = discover_targets(&root, &ThemeLayout::default()).unwrap_err();
        assert!(matches!(err, InstallError::RootNotFound(_)));
    }

    #[test]
    fn empty_root_yields_no_targets() {
        let tmp = TestTempDir::new("discover-empty");
        fs::create_dir_all(tmp.child("Adobe")).unwrap();
        let targets = discover_targets(&tmp.child("Adobe"), &ThemeLayout::default()).unwrap();
        assert!(targets.is_empty());
    }

    #[test]
    fn finds_marker_directories_at_any_depth() {
        let tmp = TestTempDir::new("discover-deep");
        let root = tmp.child("Adobe");
        let shallow = root.join("Dreamweaver CS6").join("CodeColoring");
        let deep = root
            .join("Dreamweaver CC 2019")
            .join("en_US")
            .join("Configuration")
            .join("CodeColoring");
        fs::create_dir_all(&shallow).unwrap();
        fs::create_dir_all(&deep).unwrap();
        fs::create_dir_all(root.join("Acrobat").join("Preferences")).unwrap();

        let mut found: Vec<_> = discover_targets(&root, &ThemeLayout::default())
            .unwrap()
            .into_iter()
            .map(|t| t.dir().to_path_buf())
            .collect();
        found.sort();
        let mut expected = vec![shallow, deep];
        expected.sort();
        assert_eq!(found, expected);
    }

    #[test]
    fn files_named_like_the_marker_are_ignored() {
        let tmp = TestTempDir::new("discover-file-marker");
        tmp.write_text("Adobe/CodeColoring", "file, not dir");
        let targets = discover_targets(&tmp.child("Adobe"), &ThemeLayout::default()).unwrap();
        assert!(targets.is_empty());
    }

    #[test]
    fn root_itself_is_not_a_target() {
        let tmp = TestTempDir::new("discover-root-named");
        let root = tmp.child("CodeColoring");
        fs::create_dir_all(&root).unwrap();
        let targets = discover_targets(&root, &ThemeLayout::default()).unwrap();
        assert!(targets.is_empty());
    }

    #[test]
    fn targets_carry_configured_theme_file_name() {
        let tmp = TestTempDir::new("discover-layout");
        fs::create_dir_all(tmp.child("root/Prefs")).unwrap();
        let layout = ThemeLayout {
            marker_dir: "Prefs".to_string(),
            theme_file: "Theme.xml".to_string(),
        };
        let targets = discover_targets(&tmp.child("root"), &layout).unwrap();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].theme_path(), tmp.child("root/Prefs/Theme.xml"));
        assert_eq!(
            targets[0].backup_path(),
            tmp.child("root/Prefs/Theme.xml.bak")
        );
    }
}
