// src/config/mod.rs

//! Watch configuration: optional TOML defaults, CLI overrides, validation.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_file_defaults, resolve};
pub use model::{FileDefaults, RawWatchConfig, WatchConfig, DEFAULT_INTERVAL_SECS};
pub use validate::coerce_interval;
