#![allow(dead_code)]

use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dirwatcher::config::WatchConfig;
use dirwatcher::engine::WatchCore;
use dirwatcher::fs::mock::MockFileSystem;
use dirwatcher::fs::{FileSystem, RealFileSystem};
use dirwatcher_test_utils::eventually;

/// Watch core over a shared mock filesystem, already initialised.
pub fn mock_core(fs: &MockFileSystem, config: WatchConfig) -> WatchCore {
    let mut core = WatchCore::new(config, Arc::new(fs.clone()));
    core.initialize();
    core
}

pub fn lines_of(report: &dirwatcher::engine::CycleReport) -> Vec<(String, usize)> {
    report
        .found
        .iter()
        .map(|f| (f.file_name.clone(), f.line))
        .collect()
}

pub fn write(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).expect("write test file");
}

/// Real filesystem that counts directory listings, so tests can wait for the
/// run loop to finish whole cycles instead of sleeping for a fixed time.
#[derive(Debug, Clone, Default)]
pub struct CountingFs {
    inner: RealFileSystem,
    listings: Arc<AtomicUsize>,
}

impl CountingFs {
    pub fn listings(&self) -> usize {
        self.listings.load(Ordering::SeqCst)
    }

    /// Wait until at least one full cycle has run after this call.
    ///
    /// The next listing may already be in progress, so wait for the one
    /// after it: by then the cycle that saw the current state has finished.
    pub async fn wait_for_full_cycle(&self) -> anyhow::Result<()> {
        let target = self.listings() + 2;
        eventually(|| self.listings() >= target).await
    }
}

impl FileSystem for CountingFs {
    fn list_dir(&self, path: &Path) -> anyhow::Result<Vec<String>> {
        self.listings.fetch_add(1, Ordering::SeqCst);
        self.inner.list_dir(path)
    }

    fn open_read(&self, path: &Path) -> anyhow::Result<Box<dyn Read + Send>> {
        self.inner.open_read(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.inner.is_file(path)
    }
}
