// crates/ports/src/filesystem.rs
use header_bump_shared_kernel::{FilePath, Result};

/// Port for reading and replacing a whole file.
///
/// Content is raw bytes; no encoding is assumed.
pub trait FileStore {
    /// Read the entire file.
    fn read(&self, path: &FilePath) -> Result<Vec<u8>>;

    /// Replace the file's content with `content`.
    fn replace(&self, path: &FilePath, content: &[u8]) -> Result<()>;
}
