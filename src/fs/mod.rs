// src/fs/mod.rs

use std::fmt::Debug;
use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

pub mod mock;

/// Abstract filesystem interface.
///
/// The watch core only ever needs to list one directory (non-recursively),
/// tell regular files apart from everything else, and open a file for reading.
pub trait FileSystem: Send + Sync + Debug {
    /// Return the names (not full paths) of the entries in a directory.
    fn list_dir(&self, path: &Path) -> Result<Vec<String>>;
    fn open_read(&self, path: &Path) -> Result<Box<dyn Read + Send>>;
    fn is_file(&self, path: &Path) -> bool;
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn list_dir(&self, path: &Path) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(path).with_context(|| format!("reading dir {:?}", path))? {
            let entry = entry.with_context(|| format!("reading entry of {:?}", path))?;
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                // A lossy name would not round-trip through `join`.
                Err(raw) => warn!("skipping non UTF-8 entry {:?} in {:?}", raw, path),
            }
        }
        Ok(names)
    }

    fn open_read(&self, path: &Path) -> Result<Box<dyn Read + Send>> {
        let file = fs::File::open(path).with_context(|| format!("opening file {:?}", path))?;
        Ok(Box::new(file))
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}
