//! dwcolorizer: install or revert a Dreamweaver color theme.
//!
//! The crate finds every `CodeColoring` directory under the per-user Adobe
//! application-data folder. It installs the bundled `Colors.xml` there and
//! keeps one `.bak` generation, or swaps the live file with that backup.
//!
//! # Quick start
//!
//! ```no_run
//! use dwcolorizer::installer::{run, Operation, ThemeLayout};
//! use dwcolorizer::theme::BUNDLED_THEME;
//! use dwcolorizer::ui::render::Renderer;
//!
//! let root = dirs::config_dir().unwrap().join("Adobe");
//! let report = run(
//!     &root,
//!     &ThemeLayout::default(),
//!     Operation::Install,
//!     BUNDLED_THEME,
//!     &Renderer::new(true),
//! )
//! .unwrap();
//! println!("{} profile(s) updated", report.completed);
//! ```

pub mod app;
pub mod build_info;
pub mod config;
pub mod error;
pub mod installer;
pub mod launcher;
#[cfg(test)]
pub mod testsupport;
pub mod theme;
pub mod ui;
