//! Top-level config loading pipeline.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ConfigError;

use super::env::apply_runtime_env_overrides;
use super::sources::read_config_text_with_sources;
use super::Config;

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        dirs::config_dir,
    )
}

pub(super) fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<Config, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (config_text, source) =
        read_config_text_with_sources(path_override, &read_file, &config_root)?;
    debug!(?source, "config source resolved");
    let mut config: Config = toml::from_str(&config_text)?;
    apply_runtime_env_overrides(&mut config, &env_lookup);
    validate_config(&config)?;
    Ok(config)
}

/// Reject names that would escape or collapse the target directory.
pub(super) fn validate_config(config: &Config) -> Result<(), ConfigError> {
    for (key, value) in [
        ("paths.vendor_dir", &config.paths.vendor_dir),
        ("paths.marker_dir", &config.paths.marker_dir),
        ("paths.theme_file", &config.paths.theme_file),
    ] {
        validate_plain_name(key, value)?;
    }
    if config.launch.enabled && config.launch.command.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "`launch.command` is empty; set a command or `launch.enabled = false`".to_string(),
        ));
    }
    Ok(())
}

fn validate_plain_name(key: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("`{key}` must not be empty")));
    }
    if trimmed.contains(['/', '\\']) || trimmed == "." || trimmed == ".." {
        return Err(ConfigError::Invalid(format!(
            "`{key}` must be a single path component, got `{value}`"
        )));
    }
    Ok(())
}
