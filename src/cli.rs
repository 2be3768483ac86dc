// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `dirwatcher`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dirwatcher",
    version,
    about = "Watch a directory and report lines containing a magic string.",
    long_about = None
)]
pub struct CliArgs {
    /// Directory to watch (not recursive).
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Magic string to search for in matching files.
    #[arg(value_name = "STRING")]
    pub magic: String,

    /// Only scan files whose name ends with this suffix.
    ///
    /// Default: `.txt`. Pass `*` to scan every file; pass `--ext` with no
    /// value to scan nothing (files are still tracked).
    #[arg(
        long,
        value_name = "EXT",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub ext: Option<String>,

    /// Poll interval in seconds (default 1.0). Negative values fall back to
    /// the default.
    #[arg(short = 'i', value_name = "SECONDS", allow_negative_numbers = true)]
    pub interval: Option<f64>,

    /// Optional TOML file providing `ext` / `interval` defaults.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DIRWATCHER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
