// src/engine/runtime.rs

use std::fmt;
use std::time::{Duration, Instant};

use tracing::{debug, error, info, warn};

use crate::errors::{ErrorKind, Result};
use crate::watch::SnapshotStore;

use super::core::WatchCore;
use super::signals::ShutdownFlag;
use super::{CycleReport, RunState};

const BANNER_RULE_WIDTH: usize = 80;

/// How a poll cycle ended, and what the loop does about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Diff and scans ran (individual file failures are inside the report).
    Completed(CycleReport),
    /// The watched directory could not be listed; try again next cycle.
    DirectoryUnavailable,
    /// Something unexpected failed; sleep one extra interval first.
    Backoff,
}

/// What the loop hands back once it reaches `Terminated`.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub cycles: u64,
    pub uptime: Duration,
    pub final_state: RunState,
    pub store: SnapshotStore,
}

/// Drives the [`WatchCore`] on a timer until shutdown is requested.
///
/// This is the async shell around the core: it owns sleeping, the shutdown
/// flag and the recovery policy. Shutdown is only observed between cycles,
/// never during one.
pub struct Runtime {
    core: WatchCore,
    shutdown: ShutdownFlag,
    state: RunState,
    started: Instant,
    cycles: u64,
}

impl fmt::Debug for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("state", &self.state)
            .field("cycles", &self.cycles)
            .field("core", &self.core)
            .finish_non_exhaustive()
    }
}

impl Runtime {
    pub fn new(core: WatchCore, shutdown: ShutdownFlag) -> Self {
        Self {
            core,
            shutdown,
            state: RunState::Starting,
            started: Instant::now(),
            cycles: 0,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Main loop.
    ///
    /// - `Starting`: initial fill of the snapshot.
    /// - `Sleeping`: wait one interval (a shutdown request cuts it short).
    /// - `Polling`: one diff + scan cycle, then check the shutdown flag.
    /// - `Stopping`: log uptime, then `Terminated`.
    pub async fn run(mut self) -> Result<RunSummary> {
        self.core.initialize();
        info!(
            tracked = self.core.store().len(),
            "watching {}",
            self.core.config().path().display()
        );

        loop {
            self.transition(RunState::Sleeping);
            self.sleep_interval().await;

            self.transition(RunState::Polling);
            if let CycleOutcome::Backoff = self.poll_once() {
                self.sleep_interval().await;
            }

            if self.shutdown.is_requested() {
                break;
            }
        }

        self.transition(RunState::Stopping);
        let uptime = self.started.elapsed();
        info!("{}", stop_banner(uptime));

        self.transition(RunState::Terminated);
        Ok(RunSummary {
            cycles: self.cycles,
            uptime,
            final_state: self.state,
            store: self.core.store().clone(),
        })
    }

    /// Run one cycle and apply the recovery policy to its result.
    pub fn poll_once(&mut self) -> CycleOutcome {
        self.cycles += 1;
        let outcome = classify(self.core.poll_cycle());
        match &outcome {
            CycleOutcome::Completed(report) => {
                debug!(
                    cycle = self.cycles,
                    added = report.added.len(),
                    removed = report.removed.len(),
                    found = report.found.len(),
                    failures = report.failures.len(),
                    "cycle complete"
                );
            }
            CycleOutcome::DirectoryUnavailable | CycleOutcome::Backoff => {}
        }
        outcome
    }

    async fn sleep_interval(&self) {
        let interval = self.core.config().interval();
        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = self.shutdown.wait() => {
                debug!("sleep interrupted by shutdown request");
            }
        }
    }

    fn transition(&mut self, next: RunState) {
        debug!(from = %self.state, to = %next, "run state");
        self.state = next;
    }
}

/// Map a cycle result to the loop's recovery action.
///
/// `WatchCore::poll_cycle` only returns `DirectoryAccess` today; the other
/// arms keep the policy total for any error kind a cycle may grow.
fn classify(result: Result<CycleReport>) -> CycleOutcome {
    match result {
        Ok(report) => CycleOutcome::Completed(report),
        Err(err) => match err.kind() {
            ErrorKind::DirectoryAccess => {
                error!("{err}");
                CycleOutcome::DirectoryUnavailable
            }
            ErrorKind::FileAccess | ErrorKind::InvalidArgument => {
                warn!("{err}");
                CycleOutcome::Completed(CycleReport::default())
            }
            ErrorKind::Unclassified => {
                error!("Something went wrong: {err}");
                CycleOutcome::Backoff
            }
        },
    }
}

/// Startup banner naming the program and watch parameters.
pub fn start_banner(program: &str, path: &std::path::Path, pattern: &str) -> String {
    let rule = "-".repeat(BANNER_RULE_WIDTH);
    format!(
        "\n{rule}\n\tRunning {program}\n\tWatching {} for {pattern:?}\n{rule}",
        path.display()
    )
}

fn stop_banner(uptime: Duration) -> String {
    let rule = "-".repeat(BANNER_RULE_WIDTH);
    format!(
        "\n{rule}\n\tStopping dirwatcher\n\tUptime was {}\n{rule}",
        format_uptime(uptime)
    )
}

/// `H:MM:SS.ffffff`
pub fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    format!(
        "{}:{:02}:{:02}.{:06}",
        secs / 3600,
        (secs / 60) % 60,
        secs % 60,
        uptime.subsec_micros()
    )
}
