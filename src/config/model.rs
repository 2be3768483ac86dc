// src/config/model.rs

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::types::ExtensionFilter;

/// Poll interval used when none is given or the given one is invalid.
pub const DEFAULT_INTERVAL_SECS: f64 = 1.0;

/// Optional defaults loaded from a TOML file passed via `--config`.
///
/// ```toml
/// ext = ".log"
/// interval = 0.5
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileDefaults {
    #[serde(default)]
    pub ext: Option<ExtensionFilter>,
    #[serde(default)]
    pub interval: Option<f64>,
}

/// Configuration as gathered from the CLI and config file, before any
/// validation or coercion.
#[derive(Debug, Clone, PartialEq)]
pub struct RawWatchConfig {
    pub path: PathBuf,
    pub pattern: String,
    pub extension: ExtensionFilter,
    /// Seconds; may be negative or non-finite at this stage.
    pub interval: f64,
}

/// Validated configuration consumed read-only by the watch engine.
///
/// Only constructible through `TryFrom<RawWatchConfig>`.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchConfig {
    path: PathBuf,
    pattern: String,
    extension: ExtensionFilter,
    interval: Duration,
}

impl WatchConfig {
    pub(crate) fn new_unchecked(
        path: PathBuf,
        pattern: String,
        extension: ExtensionFilter,
        interval: Duration,
    ) -> Self {
        Self {
            path,
            pattern,
            extension,
            interval,
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn extension(&self) -> &ExtensionFilter {
        &self.extension
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
