use std::{fs, io, path::Path};

/// Read access to built artifacts.
pub trait ArtifactStore {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Size in bytes as reported by the storage metadata.
    fn size(&self, path: &Path) -> io::Result<u64>;
}

/// Artifacts on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl ArtifactStore for FsStore {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn size(&self, path: &Path) -> io::Result<u64> {
        Ok(fs::metadata(path)?.len())
    }
}
