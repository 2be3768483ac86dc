// src/fs/mock.rs

use super::FileSystem;
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone)]
pub enum MockEntry {
    File(Vec<u8>),
    Dir(Vec<String>), // List of child names
    /// A file that shows up in listings but refuses to open.
    Unreadable,
}

/// In-memory filesystem for tests.
///
/// Cloning shares the underlying state, so a test can keep one handle while
/// the watch core owns another.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    entries: Arc<Mutex<HashMap<PathBuf, MockEntry>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<PathBuf, MockEntry>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Create (or keep) a directory and its ancestors.
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut entries = self.lock();
        ensure_dir(&mut entries, path.as_ref());
    }

    /// Create or overwrite a file, creating parent directories implicitly.
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        self.insert_leaf(path.as_ref(), MockEntry::File(content.into()));
    }

    /// Create a file that is listed but fails on open (e.g. permission denied).
    pub fn add_unreadable(&self, path: impl AsRef<Path>) {
        self.insert_leaf(path.as_ref(), MockEntry::Unreadable);
    }

    /// Append to an existing file, or create it.
    pub fn append(&self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) {
        let path = path.as_ref();
        let mut entries = self.lock();
        if let Some(MockEntry::File(existing)) = entries.get_mut(path) {
            existing.extend_from_slice(content.as_ref());
            return;
        }
        drop(entries);
        self.add_file(path, content.as_ref().to_vec());
    }

    /// Remove a file or directory (and everything below it).
    pub fn remove(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let mut entries = self.lock();
        entries.retain(|p, _| !p.starts_with(path));
        if let Some((parent, name)) = split_parent(path) {
            if let Some(MockEntry::Dir(children)) = entries.get_mut(&parent) {
                children.retain(|c| c != &name);
            }
        }
    }

    fn insert_leaf(&self, path: &Path, entry: MockEntry) {
        let mut entries = self.lock();
        if let Some((parent, name)) = split_parent(path) {
            ensure_dir(&mut entries, &parent);
            if let Some(MockEntry::Dir(children)) = entries.get_mut(&parent) {
                if !children.contains(&name) {
                    children.push(name);
                }
            }
        }
        entries.insert(path.to_path_buf(), entry);
    }
}

fn split_parent(path: &Path) -> Option<(PathBuf, String)> {
    let name = path.file_name()?.to_str()?.to_string();
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Some((parent, name))
}

fn ensure_dir(entries: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
    if entries.contains_key(path) {
        return;
    }
    entries.insert(path.to_path_buf(), MockEntry::Dir(Vec::new()));
    if let Some((parent, name)) = split_parent(path) {
        if parent != path {
            ensure_dir(entries, &parent);
            if let Some(MockEntry::Dir(children)) = entries.get_mut(&parent) {
                if !children.contains(&name) {
                    children.push(name);
                }
            }
        }
    }
}

impl FileSystem for MockFileSystem {
    fn list_dir(&self, path: &Path) -> Result<Vec<String>> {
        let entries = self.lock();
        match entries.get(path) {
            Some(MockEntry::Dir(children)) => Ok(children.clone()),
            _ => Err(anyhow!("Not a directory or not found: {:?}", path)),
        }
    }

    fn open_read(&self, path: &Path) -> Result<Box<dyn Read + Send>> {
        let entries = self.lock();
        match entries.get(path) {
            Some(MockEntry::File(content)) => Ok(Box::new(Cursor::new(content.clone()))),
            Some(MockEntry::Dir(_)) => Err(anyhow!("Is a directory: {:?}", path)),
            Some(MockEntry::Unreadable) => Err(anyhow!("Permission denied: {:?}", path)),
            None => Err(anyhow!("File not found: {:?}", path)),
        }
    }

    fn is_file(&self, path: &Path) -> bool {
        let entries = self.lock();
        matches!(
            entries.get(path),
            Some(MockEntry::File(_)) | Some(MockEntry::Unreadable)
        )
    }
}
