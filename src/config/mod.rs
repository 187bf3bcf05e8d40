//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`DWC_ROOT`, `DWC_NO_COLOR`, `DWC_LAUNCH_COMMAND`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./dwc.toml in the current directory
//! 4. `<config_dir>/dwc/dwc.toml` (`%APPDATA%\dwc\dwc.toml` on Windows)
//! 5. Built-in defaults
//!
//! CLI flags are applied on top of the loaded result by `main`.

mod defaults;
mod env;
mod loader;
mod sources;
mod types;

pub use loader::load_config;
pub use types::{Config, DisplayConfig, LaunchConfig, PathsConfig, PromptsConfig};

#[cfg(test)]
mod tests {
    use super::loader::{load_config_from_sources, validate_config};
    use super::sources::{read_config_text_with_sources, ConfigSource};
    use super::*;
    use crate::error::ConfigError;
    use std::collections::HashMap;
    use std::io;
    use std::path::{Path, PathBuf};

    fn not_found(_: &Path) -> Result<String, io::Error> {
        Err(io::Error::new(io::ErrorKind::NotFound, "missing"))
    }

    fn files(entries: &[(&str, &str)]) -> impl Fn(&Path) -> Result<String, io::Error> {
        let map: HashMap<PathBuf, String> = entries
            .iter()
            .map(|(path, text)| (PathBuf::from(path), text.to_string()))
            .collect();
        move |path: &Path| {
            map.get(path)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "missing"))
        }
    }

    #[test]
    fn defaults_are_sensible() {
        let c = Config::default();
        assert_eq!(c.paths.vendor_dir, "Adobe");
        assert_eq!(c.paths.marker_dir, "CodeColoring");
        assert_eq!(c.paths.theme_file, "Colors.xml");
        assert!(c.paths.root.is_none());
        assert!(c.display.color);
        assert!(c.launch.enabled);
        assert_eq!(c.launch.command, "dreamweaver");
        assert!(c.prompts.pause);
    }

    #[test]
    fn parse_partial_toml() {
        let toml = r#"
            [paths]
            marker_dir = "Colors"

            [launch]
            enabled = false
        "#;
        let c = load_config_from_sources(
            Some("custom.toml"),
            files(&[("custom.toml", toml)]),
            |_| None,
            || None,
        )
        .unwrap();
        assert_eq!(c.paths.marker_dir, "Colors");
        assert_eq!(c.paths.theme_file, "Colors.xml");
        assert!(!c.launch.enabled);
        assert!(c.display.color);
    }

    #[test]
    fn explicit_config_path_must_exist() {
        let err = load_config_from_sources(Some("nope.toml"), not_found, |_| None, || None)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn local_file_wins_over_global() {
        let global = PathBuf::from("/cfg").join("dwc").join("dwc.toml");
        let read = files(&[
            ("dwc.toml", "[display]\ncolor = false\n"),
            (global.to_str().unwrap(), "[display]\ncolor = true\n"),
        ]);
        let (text, source) =
            read_config_text_with_sources(None, &read, &|| Some(PathBuf::from("/cfg"))).unwrap();
        assert_eq!(source, ConfigSource::Local);
        assert!(text.contains("false"));
    }

    #[test]
    fn global_file_used_when_no_local_file() {
        let global = PathBuf::from("/cfg").join("dwc").join("dwc.toml");
        let read = files(&[(global.to_str().unwrap(), "[prompts]\npause = false\n")]);
        let (_, source) =
            read_config_text_with_sources(None, &read, &|| Some(PathBuf::from("/cfg"))).unwrap();
        assert_eq!(source, ConfigSource::Global(global));
    }

    #[test]
    fn missing_files_fall_back_to_defaults() {
        let (text, source) = read_config_text_with_sources(None, &not_found, &|| None).unwrap();
        assert!(text.is_empty());
        assert_eq!(source, ConfigSource::BuiltInDefaults);
    }

    #[test]
    fn env_overrides_apply_over_file_values() {
        let toml = "[paths]\nroot = \"/from/file\"\n";
        let c = load_config_from_sources(
            Some("c.toml"),
            files(&[("c.toml", toml)]),
            |name| match name {
                "DWC_ROOT" => Some("/from/env".to_string()),
                "DWC_NO_COLOR" => Some("1".to_string()),
                "DWC_LAUNCH_COMMAND" => Some("dw".to_string()),
                _ => None,
            },
            || None,
        )
        .unwrap();
        assert_eq!(c.paths.root, Some(PathBuf::from("/from/env")));
        assert!(!c.display.color);
        assert_eq!(c.launch.command, "dw");
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let c = load_config_from_sources(
            None,
            not_found,
            |name| (name == "DWC_NO_COLOR").then(|| "  ".to_string()),
            || None,
        )
        .unwrap();
        assert!(c.display.color);
    }

    #[test]
    fn invalid_toml_is_reported() {
        let err = load_config_from_sources(
            Some("bad.toml"),
            files(&[("bad.toml", "[paths\n")]),
            |_| None,
            || None,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn names_with_separators_are_rejected() {
        let mut c = Config::default();
        c.paths.theme_file = "../Colors.xml".to_string();
        let err = validate_config(&c).unwrap_err();
        assert!(err.to_string().contains("paths.theme_file"));

        let mut c = Config::default();
        c.paths.marker_dir = "  ".to_string();
        assert!(validate_config(&c).is_err());
    }

    #[test]
    fn empty_launch_command_rejected_only_when_enabled() {
        let mut c = Config::default();
        c.launch.command = String::new();
        assert!(validate_config(&c).is_err());
        c.launch.enabled = false;
        assert!(validate_config(&c).is_ok());
    }

    #[test]
    fn search_root_prefers_explicit_root() {
        let mut c = Config::default();
        let app_data = PathBuf::from("/home/u/.config");
        assert_eq!(
            c.search_root(Some(app_data.as_path())),
            Some(app_data.join("Adobe"))
        );
        assert_eq!(c.search_root(None), None);

        c.paths.root = Some(PathBuf::from("/elsewhere"));
        assert_eq!(
            c.search_root(Some(app_data.as_path())),
            Some(PathBuf::from("/elsewhere"))
        );
    }
}
