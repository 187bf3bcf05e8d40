//! Unified error types for the colorizer.

use std::fmt;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// InstallError
// ---------------------------------------------------------------------------

/// Errors raised while discovering targets or moving theme files around.
#[derive(Debug)]
pub enum InstallError {
    /// The application-data root (vendor folder) does not exist.
    RootNotFound(PathBuf),
    /// Revert was requested but the target has no `.bak` file.
    NoBackup(PathBuf),
    /// The live theme file is held open by another process or is read-only.
    Locked(PathBuf),
    /// A read, copy, or write failed on `path`.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl InstallError {
    /// Attach a path to a raw I/O error.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl fmt::Display for InstallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootNotFound(path) => {
                write!(f, "application data directory not found: {}", path.display())
            }
            Self::NoBackup(path) => write!(f, "no backup exists: {}", path.display()),
            Self::Locked(path) => {
                write!(f, "file is in use or not writable: {}", path.display())
            }
            Self::Io { path, source } => write!(f, "io: {}: {source}", path.display()),
        }
    }
}

impl std::error::Error for InstallError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}
