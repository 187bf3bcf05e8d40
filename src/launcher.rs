//! Best-effort launch of the themed application after a run.

use std::io;
use std::process::{Command, Stdio};

use tracing::{debug, warn};

/// Build the platform command that opens `app`.
#[cfg(target_os = "windows")]
pub fn launch_command(app: &str) -> Command {
    // Shell `start` resolves App Paths registrations like `dreamweaver`. The
    // empty title keeps a quoted path from being taken as the window title.
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "", app]);
    cmd
}

/// Build the platform command that opens `app`.
#[cfg(target_os = "macos")]
pub fn launch_command(app: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.args(["-a", app]);
    cmd
}

/// Build the platform command that opens `app`.
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub fn launch_command(app: &str) -> Command {
    Command::new(app)
}

/// Spawn `app` detached from our stdio. The child is not waited on.
pub fn launch(app: &str) -> io::Result<()> {
    let mut cmd = launch_command(app);
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    debug!(?cmd, "launching application");
    match cmd.spawn() {
        Ok(_) => Ok(()),
        Err(err) => {
            warn!(app, %err, "failed to launch application");
            Err(err)
        }
    }
}
