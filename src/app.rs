//! Interactive install/revert flow wrapped around the installer.
//!
//! The flow owns the console: title and color, the welcome banner, keypress
//! waits, the closing instructions, and launching Dreamweaver. Console,
//! output, and launcher are injected so tests can drive the whole flow.

use std::io;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::build_info::AppInfo;
use crate::installer::{self, Operation, RunReport, ThemeLayout};
use crate::theme::{DEFAULT_BACKGROUND, THEME_BACKGROUND};
use crate::ui::console::Console;
use crate::ui::render::RenderSink;
use crate::ui::settings;

/// Fixed usage text printed for `/?`.
pub const USAGE: &str = "Adds a new color theme to Adobe Dreamweaver.\n\n\
                         DWC [/?] [/u]\n\n\
                         \t/?\tDisplays this help message.\n\
                         \t/u\tUndoes the theme replacement.\n";

/// Message printed when the vendor folder does not exist.
pub const ROOT_NOT_FOUND: &str = "Adobe application data directory not found.";

/// What the command line asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Default flow: install the bundled theme everywhere.
    Install,
    /// Swap the first profile's theme with its backup. `announce` is set only
    /// for the exact `/u` spelling, which prints a heading first.
    Revert { announce: bool },
    /// Print usage and exit.
    Help,
}

impl Mode {
    /// Interpret the first command-line argument.
    ///
    /// Unknown arguments fall through to `Install` without complaint.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some("/?") => Self::Help,
            Some(arg) if arg.eq_ignore_ascii_case("/u") => Self::Revert {
                announce: arg == "/u",
            },
            _ => Self::Install,
        }
    }
}

/// Everything one run needs, resolved from config and CLI flags.
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub info: AppInfo,
    pub mode: Mode,
    /// Directory searched for marker dirs; `None` when the platform has no
    /// application-data folder.
    pub root: Option<PathBuf>,
    pub layout: ThemeLayout,
    /// Theme text written by install.
    pub content: String,
    pub color: bool,
    /// Application to open at the end, if any.
    pub launch: Option<String>,
}

/// How a run ended.
#[derive(Debug)]
pub enum FlowOutcome {
    /// Usage printed.
    Help,
    /// The search root was missing; nothing was touched.
    RootMissing,
    /// Revert found no backup on the first target.
    NoBackup,
    /// The installer ran; see the report for per-target failures.
    Completed(RunReport),
}

impl FlowOutcome {
    /// Process exit code: nonzero only when a target failed with an I/O or
    /// lock error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Completed(report) if !report.is_clean() => 1,
            _ => 0,
        }
    }
}

/// Run the full interactive flow.
pub fn run(
    plan: &RunPlan,
    console: &mut dyn Console,
    sink: &dyn RenderSink,
    launch: &mut dyn FnMut(&str) -> io::Result<()>,
) -> FlowOutcome {
    if let Err(err) = console.setup(&plan.info.console_title(), plan.color) {
        debug!(%err, "console setup failed");
    }
    let outcome = run_inner(plan, console, sink, launch);
    sink.text("\n");
    if let Err(err) = console.restore() {
        debug!(%err, "console restore failed");
    }
    outcome
}

fn run_inner(
    plan: &RunPlan,
    console: &mut dyn Console,
    sink: &dyn RenderSink,
    launch: &mut dyn FnMut(&str) -> io::Result<()>,
) -> FlowOutcome {
    if plan.mode == Mode::Help {
        sink.text(USAGE);
        return FlowOutcome::Help;
    }

    sink.text(&welcome_text(&plan.info));
    sink.text(settings::PROMPT_BEGIN);
    pause(console);
    sink.text("\n\n");

    let Some(root) = plan.root.as_deref() else {
        sink.status(ROOT_NOT_FOUND);
        return FlowOutcome::RootMissing;
    };

    let operation = match plan.mode {
        Mode::Revert { announce } => {
            if announce {
                sink.text("Reverting color scheme...\n\n");
            }
            Operation::Revert
        }
        _ => Operation::Install,
    };

    // Discovery is the only fatal step; it fails only on a missing root.
    let report = match installer::run(root, &plan.layout, operation, &plan.content, sink) {
        Ok(report) => report,
        Err(err) => {
            debug!(%err, "search root missing");
            sink.status(ROOT_NOT_FOUND);
            return FlowOutcome::RootMissing;
        }
    };

    if report.missing_backup {
        return FlowOutcome::NoBackup;
    }
    if report.discovered == 0 {
        sink.warn(&format!(
            "no \"{}\" directories found under {}",
            plan.layout.marker_dir,
            root.display()
        ));
    }
    // A failed revert leaves the first profile as it was; there is nothing
    // for the user to go and adjust.
    if operation == Operation::Revert && !report.is_clean() {
        return FlowOutcome::Completed(report);
    }

    sink.text(&done_text(operation, plan.launch.is_some()));
    pause(console);

    if let Some(app) = plan.launch.as_deref() {
        if let Err(err) = launch(app) {
            sink.warn(&format!("could not start `{app}`: {err}"));
        }
    }

    FlowOutcome::Completed(report)
}

fn pause(console: &mut dyn Console) {
    if let Err(err) = console.wait_for_key() {
        warn!(%err, "keypress wait failed");
    }
}

/// Banner shown before anything happens.
pub fn welcome_text(info: &AppInfo) -> String {
    format!(
        "Welcome to the {} v{}!\n\
         This will add a new color theme to Adobe Dreamweaver.\n\n",
        info.title, info.version
    )
}

/// Closing instructions; the background hint depends on the operation.
pub fn done_text(operation: Operation, launching: bool) -> String {
    let background = match operation {
        Operation::Install => THEME_BACKGROUND,
        Operation::Revert => DEFAULT_BACKGROUND,
    };
    if launching {
        format!(
            "\nDone. Press any key and Dreamweaver will be opened to allow\n\
             you to go to Preferences (Ctrl+U), click Code Coloring, and\n\
             change the default background to #{background}."
        )
    } else {
        format!(
            "\nDone. Open Dreamweaver, go to Preferences (Ctrl+U), click\n\
             Code Coloring, and change the default background to #{background}."
        )
    }
}
