// crates/infra/src/filesystem.rs
use header_bump_ports::filesystem::FileStore;
use header_bump_shared_kernel::{FilePath, InfrastructureError, Result};
use log::debug;

use crate::persistence::{FileReader, FileWriter};

/// [`FileStore`] backed by the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsFileStore;

impl FsFileStore {
    pub fn new() -> Self {
        Self
    }
}

impl FileStore for FsFileStore {
    fn read(&self, path: &FilePath) -> Result<Vec<u8>> {
        let bytes = FileReader::read_to_end(path.as_path()).map_err(|source| {
            InfrastructureError::FileRead { path: path.to_path_buf(), source }
        })?;
        debug!("read {} bytes from {}", bytes.len(), path);
        Ok(bytes)
    }

    fn replace(&self, path: &FilePath, content: &[u8]) -> Result<()> {
        FileWriter::atomic_write(path, content).map_err(|source| {
            InfrastructureError::FileWrite { path: path.to_path_buf(), source }
        })?;
        debug!("wrote {} bytes to {}", content.len(), path);
        Ok(())
    }
}
