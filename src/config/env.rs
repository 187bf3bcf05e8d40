//! Environment variable overrides.
//!
//! `DWC_*` variables sit above every config file but below CLI flags.

use std::path::PathBuf;

use super::Config;

pub(super) const ENV_ROOT: &str = "DWC_ROOT";
pub(super) const ENV_NO_COLOR: &str = "DWC_NO_COLOR";
pub(super) const ENV_LAUNCH_COMMAND: &str = "DWC_LAUNCH_COMMAND";

pub(super) fn apply_runtime_env_overrides<FEnv>(config: &mut Config, env_lookup: &FEnv)
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(root) = non_empty(env_lookup(ENV_ROOT)) {
        config.paths.root = Some(PathBuf::from(root));
    }
    // Any non-empty value disables color, matching the NO_COLOR convention.
    if non_empty(env_lookup(ENV_NO_COLOR)).is_some() {
        config.display.color = false;
    }
    if let Some(command) = non_empty(env_lookup(ENV_LAUNCH_COMMAND)) {
        config.launch.command = command;
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
