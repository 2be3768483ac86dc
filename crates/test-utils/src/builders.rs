// crates/test-utils/src/builders.rs

use std::path::PathBuf;

use dirwatcher::config::{RawWatchConfig, WatchConfig};
use dirwatcher::types::ExtensionFilter;

/// Builder for `WatchConfig` to simplify test setup.
///
/// Defaults: path `/w`, pattern `MAGIC`, `.txt` filter, 10ms interval.
pub struct WatchConfigBuilder {
    config: RawWatchConfig,
}

impl WatchConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: RawWatchConfig {
                path: PathBuf::from("/w"),
                pattern: "MAGIC".to_string(),
                extension: ExtensionFilter::default(),
                interval: 0.01,
            },
        }
    }

    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.path = path.into();
        self
    }

    pub fn pattern(mut self, pattern: &str) -> Self {
        self.config.pattern = pattern.to_string();
        self
    }

    pub fn extension(mut self, ext: &str) -> Self {
        self.config.extension = ExtensionFilter::from(ext.to_string());
        self
    }

    pub fn interval_secs(mut self, secs: f64) -> Self {
        self.config.interval = secs;
        self
    }

    pub fn build(self) -> WatchConfig {
        WatchConfig::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for WatchConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
