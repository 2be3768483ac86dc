// src/watch/scanner.rs

//! Incremental line scanning for the magic pattern.

use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::errors::{Result, WatchError};
use crate::fs::FileSystem;
use crate::watch::snapshot::SnapshotStore;

/// A single pattern hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found {
    pub file_name: String,
    /// 1-based line number.
    pub line: usize,
}

/// Result of scanning one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub file_name: String,
    /// Every hit at or after the start line, in file order.
    pub found: Vec<Found>,
    /// Total number of lines in the file at scan time.
    pub lines_seen: usize,
}

/// Scan `path` for `pattern`, starting at zero-based line index `start_line`.
///
/// Lines before `start_line` are read but never tested. Every matching line
/// emits a "found" event and the store offset for the file ends up at the
/// 1-based number of the last matching line. When nothing matches the offset
/// is left alone.
///
/// The store key is the file's base name. Open or read failures surface as
/// [`WatchError::FileAccess`] and leave the store untouched.
pub fn scan_file(
    fs: &dyn FileSystem,
    path: &Path,
    start_line: usize,
    pattern: &str,
    store: &mut SnapshotStore,
) -> Result<ScanReport> {
    let file_name = base_name(path);

    let reader = fs.open_read(path).map_err(|e| WatchError::file(path, e))?;
    let mut reader = BufReader::new(reader);

    let mut found = Vec::new();
    let mut buf = Vec::new();
    let mut index = 0usize;

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| WatchError::file(path, e.into()))?;
        if n == 0 {
            break;
        }

        if index >= start_line {
            let line = String::from_utf8_lossy(trim_newline(&buf));
            if line.contains(pattern) {
                let line_no = index + 1;
                info!("{pattern} found on line {line_no} of {file_name}");
                found.push(Found {
                    file_name: file_name.clone(),
                    line: line_no,
                });
            }
        }
        index += 1;
    }

    if let Some(last) = found.last() {
        store.set_offset(&file_name, last.line);
    }

    debug!(
        file = %file_name,
        start_line,
        lines = index,
        hits = found.len(),
        "scan complete"
    );

    Ok(ScanReport {
        file_name,
        found,
        lines_seen: index,
    })
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

fn trim_newline(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}
