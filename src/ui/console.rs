//! Console cosmetics and keypress waits behind one small trait.
//!
//! The app flow talks to [`Console`] only. `TerminalConsole` drives a real
//! terminal through crossterm; tests substitute a scripted double. Icon and
//! font changes are not supported on any platform.

use std::io::{self, IsTerminal, Write};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::style::{ResetColor, SetForegroundColor};
use crossterm::terminal::{self, SetTitle};
use crossterm::execute;

use super::settings;

/// Console capabilities the CLI shell needs.
pub trait Console {
    /// Set window title and, when `color` is on, the console foreground.
    fn setup(&mut self, title: &str, color: bool) -> io::Result<()>;
    /// Block until the user presses a key.
    fn wait_for_key(&mut self) -> io::Result<()>;
    /// Undo any color changes made by `setup`.
    fn restore(&mut self) -> io::Result<()>;
}

/// Crossterm-backed console for interactive use.
#[derive(Debug, Default)]
pub struct TerminalConsole {
    colored: bool,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Console for TerminalConsole {
    fn setup(&mut self, title: &str, color: bool) -> io::Result<()> {
        let mut stdout = io::stdout();
        if stdout.is_terminal() {
            execute!(stdout, SetTitle(title))?;
        }
        if color {
            execute!(
                stdout,
                SetForegroundColor(settings::COLOR_CONSOLE_FOREGROUND)
            )?;
            self.colored = true;
        }
        Ok(())
    }

    fn wait_for_key(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        // Piped stdin has no keys to wait for.
        if !io::stdin().is_terminal() {
            return Ok(());
        }
        let _guard = RawModeGuard::acquire()?;
        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }

    fn restore(&mut self) -> io::Result<()> {
        if self.colored {
            execute!(io::stdout(), ResetColor)?;
            self.colored = false;
        }
        Ok(())
    }
}

/// Console that skips keypress waits, used for `--yes` and piped runs.
#[derive(Debug, Default)]
pub struct UnattendedConsole {
    inner: TerminalConsole,
}

impl UnattendedConsole {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Console for UnattendedConsole {
    fn setup(&mut self, title: &str, color: bool) -> io::Result<()> {
        self.inner.setup(title, color)
    }

    fn wait_for_key(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }

    fn restore(&mut self) -> io::Result<()> {
        self.inner.restore()
    }
}

struct RawModeGuard;

impl RawModeGuard {
    /// Enable terminal raw mode and return a guard that disables it on drop.
    fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}
