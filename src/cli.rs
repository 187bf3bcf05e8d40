//! CLI argument parsing via clap.

use clap::Parser;
use dwcolorizer::app::Mode;
use std::path::PathBuf;

/// Adds a new color theme to Adobe Dreamweaver.
#[derive(Debug, Parser)]
#[command(name = "dwc", disable_version_flag = true)]
pub struct Args {
    /// `/?` prints usage, `/u` reverts the last install. Anything else installs.
    // Unknown dash-prefixed tokens land here instead of failing the parse.
    #[arg(value_name = "COMMAND", allow_hyphen_values = true)]
    pub command: Option<String>,

    /// Extra arguments are accepted and ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,

    /// Directory to search for CodeColoring folders (default: <app data>/Adobe).
    #[arg(long = "root", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Path to config file (default: ./dwc.toml or <config dir>/dwc/dwc.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Do not open Dreamweaver when finished.
    #[arg(long = "no-launch")]
    pub no_launch: bool,

    /// Do not wait for keypresses.
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,

    /// Print version and build metadata.
    #[arg(short = 'V', long = "version")]
    pub version: bool,
}

impl Args {
    pub fn mode(&self) -> Mode {
        Mode::from_arg(self.command.as_deref())
    }
}
