//! Rendering contracts and the default terminal renderer.
//!
//! `RenderSink` is the output contract consumed by the installer and the app
//! flow. `Renderer` writes to the real console; `BufferedSink` records lines
//! so tests can assert on exactly what a run printed.

use std::cell::RefCell;
use std::io::{self, Write};

use crossterm::style::{Color, SetForegroundColor, Stylize};
use crossterm::Command;

use super::settings;

/// Injectable rendering interface used by orchestration code.
pub trait RenderSink {
    /// Write raw text as-is (banners, usage, prompts). No newline is added.
    fn text(&self, text: &str);
    /// Render one progress line for a file transition.
    fn status(&self, line: &str);
    /// Render a warning line.
    fn warn(&self, msg: &str);
    /// Render an error line.
    fn error(&self, msg: &str);
}

/// Handles all terminal output formatting.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Whether ANSI color/style output is enabled.
    color: bool,
}

impl Renderer {
    /// Create a renderer with optional color output.
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl RenderSink for Renderer {
    fn text(&self, text: &str) {
        let mut stdout = io::stdout();
        let _ = stdout.write_all(text.as_bytes());
        let _ = stdout.flush();
    }

    // Status lines inherit the console foreground set at startup.
    fn status(&self, line: &str) {
        println!("{line}");
    }

    fn warn(&self, msg: &str) {
        eprintln!(
            "{}",
            labeled_line(settings::LABEL_WARNING, settings::COLOR_WARNING, msg, self.color)
        );
    }

    fn error(&self, msg: &str) {
        eprintln!(
            "{}",
            labeled_line(settings::LABEL_ERROR, settings::COLOR_ERROR, msg, self.color)
        );
    }
}

/// Format `label msg`, styling the label when color is on.
///
/// A styled label ends with a full attribute reset, so the console foreground
/// is re-applied before the message.
fn labeled_line(label: &str, color: Color, msg: &str, styled: bool) -> String {
    if !styled {
        return format!("{label} {msg}");
    }
    let mut line = format!("{}", label.with(color).bold());
    let _ = SetForegroundColor(settings::COLOR_CONSOLE_FOREGROUND).write_ansi(&mut line);
    line.push(' ');
    line.push_str(msg);
    line
}

/// In-memory sink that records everything it is given.
#[derive(Debug, Default)]
pub struct BufferedSink {
    text: RefCell<String>,
    lines: RefCell<Vec<String>>,
    warnings: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl BufferedSink {
    /// Status lines, in order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Everything written through `text` and `status`, concatenated.
    pub fn transcript(&self) -> String {
        self.text.borrow().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }
}

impl RenderSink for BufferedSink {
    fn text(&self, text: &str) {
        self.text.borrow_mut().push_str(text);
    }

    fn status(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
        let mut text = self.text.borrow_mut();
        text.push_str(line);
        text.push('\n');
    }

    fn warn(&self, msg: &str) {
        self.warnings.borrow_mut().push(msg.to_string());
    }

    fn error(&self, msg: &str) {
        self.errors.borrow_mut().push(msg.to_string());
    }
}
