// src/watch/diff.rs

//! Added/removed detection between the snapshot and a fresh listing.

use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use crate::errors::{Result, WatchError};
use crate::fs::FileSystem;
use crate::watch::snapshot::SnapshotStore;

/// Outcome of one diff pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffReport {
    /// Names that appeared since the last pass, sorted.
    pub added: Vec<String>,
    /// Names that disappeared since the last pass, sorted.
    pub removed: Vec<String>,
    /// The listing the pass was computed from, sorted.
    pub current: Vec<String>,
}

impl DiffReport {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// List `directory` non-recursively, returning sorted entry names.
pub fn list_directory(fs: &dyn FileSystem, directory: &Path) -> Result<Vec<String>> {
    let mut names = fs
        .list_dir(directory)
        .map_err(|e| WatchError::directory(directory, e))?;
    names.sort();
    Ok(names)
}

/// Bring `store` in line with `listing`.
///
/// The removal pass runs to completion before the addition pass starts.
/// Names present on both sides keep their offset.
pub fn apply_listing(store: &mut SnapshotStore, listing: &[String]) -> DiffReport {
    let present: HashSet<&str> = listing.iter().map(String::as_str).collect();

    let mut removed = Vec::new();
    for name in store.names() {
        if !present.contains(name.as_str()) {
            info!("{name} was removed from the directory");
            store.remove(&name);
            removed.push(name);
        }
    }

    let mut added = Vec::new();
    for name in listing {
        if !store.contains(name) {
            info!("{name} was added to the directory");
            store.insert(name.clone());
            added.push(name.clone());
        }
    }
    added.sort();

    let mut current = listing.to_vec();
    current.sort();

    DiffReport {
        added,
        removed,
        current,
    }
}

/// List the directory once and apply it to the store.
///
/// A listing failure leaves the store untouched and is returned as
/// [`WatchError::DirectoryAccess`].
pub fn detect_changes(
    fs: &dyn FileSystem,
    directory: &Path,
    store: &mut SnapshotStore,
) -> Result<DiffReport> {
    let listing = list_directory(fs, directory)?;
    Ok(apply_listing(store, &listing))
}
