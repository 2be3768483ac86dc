// src/engine/core.rs

//! Synchronous watch core.
//!
//! Owns the snapshot store and runs one poll cycle at a time: diff the
//! directory, then scan every matching file from its stored offset. It has
//! no Tokio types and never sleeps, so it can be driven step by step in tests.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::WatchConfig;
use crate::errors::Result;
use crate::fs::FileSystem;
use crate::watch::{detect_changes, scan_file, SnapshotStore};

use super::{CycleReport, ScanFailure};

#[derive(Debug)]
pub struct WatchCore {
    config: WatchConfig,
    fs: Arc<dyn FileSystem>,
    store: SnapshotStore,
}

impl WatchCore {
    pub fn new(config: WatchConfig, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            config,
            fs,
            store: SnapshotStore::new(),
        }
    }

    pub fn config(&self) -> &WatchConfig {
        &self.config
    }

    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    /// Initial fill: track everything currently in the directory at offset 0.
    ///
    /// No events are emitted for these entries.
    pub fn initialize(&mut self) {
        self.store = SnapshotStore::initialize(self.fs.as_ref(), self.config.path());
    }

    /// Run one poll cycle.
    ///
    /// A per-file failure to open or read is recorded in the report and the
    /// cycle moves on to the next file. The only error this returns is
    /// `DirectoryAccess`, which aborts the cycle and leaves the store
    /// untouched.
    pub fn poll_cycle(&mut self) -> Result<CycleReport> {
        let dir = self.config.path().to_path_buf();
        let diff = detect_changes(self.fs.as_ref(), &dir, &mut self.store)?;

        let mut report = CycleReport {
            added: diff.added,
            removed: diff.removed,
            ..CycleReport::default()
        };

        for name in diff.current {
            if !self.config.extension().matches(&name) {
                continue;
            }
            let path = dir.join(&name);
            if !self.fs.is_file(&path) {
                debug!(file = %name, "skipping non-file entry");
                continue;
            }

            let start_line = self.store.get_offset(&name);
            report.scanned += 1;
            match scan_file(
                self.fs.as_ref(),
                &path,
                start_line,
                self.config.pattern(),
                &mut self.store,
            ) {
                Ok(scan) => report.found.extend(scan.found),
                // `scan_file` only fails with `FileAccess`; whatever goes wrong
                // with one file stays with that file.
                Err(err) => {
                    warn!("{err}");
                    report.failures.push(ScanFailure {
                        file_name: name,
                        message: err.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }
}
