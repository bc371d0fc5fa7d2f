//! Error types for `rpcload`
//!
//! The loader has exactly two failure classes: the file could not be read,
//! or its content could not be decoded. Callers branch on the variant; the
//! underlying cause stays reachable through `std::error::Error::source`.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced while loading a load-test configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be opened or read.
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying filesystem error.
        source: std::io::Error,
    },

    /// The content is not valid YAML or does not match the schema.
    #[error("error while parsing config file{}: {source}", fmt_path(.path.as_deref()))]
    Parse {
        /// Path of the offending file; `None` when the document came from
        /// an in-memory string rather than disk.
        path: Option<PathBuf>,
        /// Underlying decode error.
        source: serde_yaml::Error,
    },
}

fn fmt_path(path: Option<&Path>) -> String {
    path.map(|p| format!(" {}", p.display())).unwrap_or_default()
}
