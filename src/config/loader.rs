// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::model::{FileDefaults, RawWatchConfig, WatchConfig, DEFAULT_INTERVAL_SECS};
use crate::errors::Result;
use crate::types::ExtensionFilter;

/// Load optional defaults from a TOML file.
///
/// This only performs TOML deserialization; precedence and validation happen
/// in [`resolve`].
pub fn load_file_defaults(path: impl AsRef<Path>) -> Result<FileDefaults> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let defaults: FileDefaults = toml::from_str(&contents)?;
    debug!(?path, ?defaults, "loaded config file");
    Ok(defaults)
}

/// Merge CLI arguments over file defaults over built-in defaults, then
/// validate.
///
/// - `--ext` given without a value yields [`ExtensionFilter::Unset`].
/// - An invalid interval is coerced (with a warning), never rejected.
pub fn resolve(args: &CliArgs) -> Result<WatchConfig> {
    let file = match args.config.as_deref() {
        Some(path) => load_file_defaults(path)?,
        None => FileDefaults::default(),
    };

    let extension = match &args.ext {
        Some(ext) => ExtensionFilter::from(ext.clone()),
        None => file.ext.unwrap_or_default(),
    };

    let interval = args
        .interval
        .or(file.interval)
        .unwrap_or(DEFAULT_INTERVAL_SECS);

    let raw = RawWatchConfig {
        path: args.path.clone(),
        pattern: args.magic.clone(),
        extension,
        interval,
    };

    WatchConfig::try_from(raw)
}
