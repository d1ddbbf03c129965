//! In-memory collaborators for sizing tests.

use bundlesize_core::{ArtifactStore, SizeEstimator};
use std::{
    cell::RefCell,
    collections::HashMap,
    io,
    path::{Path, PathBuf},
};

/// Artifacts held in memory, counting how often each one is read.
#[derive(Default)]
pub(crate) struct MemoryStore {
    files: HashMap<PathBuf, Vec<u8>>,
    reads: RefCell<HashMap<PathBuf, usize>>,
}

impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_file(mut self, path: &str, len: usize) -> Self {
        self.files.insert(PathBuf::from(path), vec![b'x'; len]);
        self
    }

    pub(crate) fn reads(&self, path: &str) -> usize {
        self.reads.borrow().get(Path::new(path)).copied().unwrap_or(0)
    }

    fn lookup(&self, path: &Path) -> io::Result<&Vec<u8>> {
        self.files
            .get(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))
    }
}

impl ArtifactStore for MemoryStore {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let bytes = self.lookup(path)?.clone();
        *self.reads.borrow_mut().entry(path.to_path_buf()).or_default() += 1;
        Ok(bytes)
    }

    fn size(&self, path: &Path) -> io::Result<u64> {
        Ok(self.lookup(path)?.len() as u64)
    }
}

/// Pretends every artifact compresses to 40% of its size.
pub(crate) struct RatioEstimator;

impl SizeEstimator for RatioEstimator {
    fn estimate(&self, bytes: &[u8]) -> io::Result<u64> {
        Ok(bytes.len() as u64 * 2 / 5)
    }
}
