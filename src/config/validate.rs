// src/config/validate.rs

use std::time::Duration;

use tracing::warn;

use crate::config::model::{RawWatchConfig, WatchConfig, DEFAULT_INTERVAL_SECS};
use crate::errors::{Result, WatchError};

impl TryFrom<RawWatchConfig> for WatchConfig {
    type Error = crate::errors::WatchError;

    fn try_from(raw: RawWatchConfig) -> std::result::Result<Self, Self::Error> {
        validate_pattern(&raw.pattern)?;
        let interval = coerce_interval(raw.interval);
        Ok(WatchConfig::new_unchecked(
            raw.path,
            raw.pattern,
            raw.extension,
            interval,
        ))
    }
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        return Err(WatchError::ConfigError(
            "magic string must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Turn a user-supplied interval into a `Duration`.
///
/// Negative or non-finite values are replaced with the default, with a
/// warning. This never fails.
pub fn coerce_interval(secs: f64) -> Duration {
    if !secs.is_finite() || secs < 0.0 {
        let err = WatchError::InvalidArgument(format!("interval must be positive (got {secs})"));
        warn!("{err}");
        warn!("Interval changed to default of {DEFAULT_INTERVAL_SECS}");
        return Duration::from_secs_f64(DEFAULT_INTERVAL_SECS);
    }
    // `from_secs_f64` panics past `Duration::MAX`.
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
}
