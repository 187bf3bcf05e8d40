//! Centralized console strings and colors.
//!
//! This is the single place to tweak labels and the palette.

use crossterm::style::Color;

pub const LABEL_WARNING: &str = "warning:";
pub const LABEL_ERROR: &str = "error:";

/// Foreground applied to the whole console at startup.
pub const COLOR_CONSOLE_FOREGROUND: Color = Color::Red;
pub const COLOR_WARNING: Color = Color::Yellow;
pub const COLOR_ERROR: Color = Color::Red;

/// Prompt shown before the interactive run starts.
pub const PROMPT_BEGIN: &str = "Press any key to begin...";
