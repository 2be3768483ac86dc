// src/engine/mod.rs

//! Run loop for dirwatcher.
//!
//! This module ties together:
//! - the pure watch core (snapshot + diff + scans, one cycle at a time)
//! - the shutdown flag set from signal handlers
//! - the async shell that sleeps between cycles and applies the recovery
//!   policy for failed cycles
//!
//! The synchronous core lives in [`core`]; the async/IO shell is implemented
//! in [`runtime`].

use std::fmt;

use crate::watch::Found;

/// Run loop states. Transitions:
/// `Starting -> Sleeping -> Polling -> (Sleeping | Stopping) -> Terminated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Starting,
    Sleeping,
    Polling,
    Stopping,
    Terminated,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RunState::Starting => "starting",
            RunState::Sleeping => "sleeping",
            RunState::Polling => "polling",
            RunState::Stopping => "stopping",
            RunState::Terminated => "terminated",
        };
        f.write_str(s)
    }
}

/// A file that could not be scanned this cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanFailure {
    pub file_name: String,
    pub message: String,
}

/// Everything observable about one poll cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub found: Vec<Found>,
    pub failures: Vec<ScanFailure>,
    /// Number of files handed to the scanner.
    pub scanned: usize,
}

impl CycleReport {
    /// True when the cycle produced no added/removed/found events.
    pub fn is_quiet(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.found.is_empty()
    }
}

pub mod core;
pub mod runtime;
pub mod signals;

pub use core::WatchCore;
pub use runtime::{format_uptime, CycleOutcome, RunSummary, Runtime};
pub use signals::{install_signal_handlers, ShutdownFlag};
