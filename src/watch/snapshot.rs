// src/watch/snapshot.rs

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, error};

use crate::fs::FileSystem;
use crate::watch::diff::list_directory;

/// In-memory snapshot of the watched directory.
///
/// Maps a file name (never a full path) to the 1-based line number up to
/// which that file has been scanned. `0` means "not scanned yet".
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SnapshotStore {
    offsets: HashMap<String, usize>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self {
            offsets: HashMap::new(),
        }
    }

    /// Fill the store with every entry currently in `directory`, each at
    /// offset 0.
    ///
    /// An unreadable directory is logged and leaves the store empty; it is
    /// never fatal.
    pub fn initialize(fs: &dyn FileSystem, directory: &Path) -> Self {
        let mut store = Self::new();
        match list_directory(fs, directory) {
            Ok(names) => {
                for name in names {
                    store.insert(name);
                }
                debug!(tracked = store.len(), "initial fill complete");
            }
            Err(err) => {
                error!("{} not found: {err}", directory.display());
            }
        }
        store
    }

    /// Stored offset, or 0 for an untracked file.
    pub fn get_offset(&self, file_name: &str) -> usize {
        self.offsets.get(file_name).copied().unwrap_or(0)
    }

    /// Overwrite the offset of a tracked file. Untracked names are ignored.
    pub fn set_offset(&mut self, file_name: &str, value: usize) {
        if let Some(offset) = self.offsets.get_mut(file_name) {
            *offset = value;
        }
    }

    /// Start tracking a file at offset 0 (resets the offset if already tracked).
    pub fn insert(&mut self, file_name: impl Into<String>) {
        self.offsets.insert(file_name.into(), 0);
    }

    pub fn remove(&mut self, file_name: &str) -> bool {
        self.offsets.remove(file_name).is_some()
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.offsets.contains_key(file_name)
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Tracked names, sorted for stable iteration.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.offsets.keys().cloned().collect();
        names.sort();
        names
    }
}
