// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod types;
pub mod watch;

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::engine::runtime::start_banner;
use crate::engine::{install_signal_handlers, Runtime, ShutdownFlag, WatchCore};
use crate::fs::RealFileSystem;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - SIGINT / SIGTERM handling (before anything is watched)
/// - config resolution (CLI over `--config` file over defaults)
/// - the watch core on the real filesystem
/// - the run loop, until a signal stops it
pub async fn run(args: CliArgs) -> Result<()> {
    let shutdown = ShutdownFlag::new();
    let _signals = install_signal_handlers(shutdown.clone())?;

    let config = config::resolve(&args)?;
    info!(
        "{}",
        start_banner(env!("CARGO_PKG_NAME"), config.path(), config.pattern())
    );
    info!(
        extension = %config.extension(),
        interval = ?config.interval(),
        "watch configuration"
    );

    let core = WatchCore::new(config, Arc::new(RealFileSystem));
    let summary = Runtime::new(core, shutdown).run().await?;

    debug!(
        cycles = summary.cycles,
        tracked = summary.store.len(),
        "run loop finished"
    );
    Ok(())
}
