use std::{
    fs::{self, File, OpenOptions},
    io::{self, BufWriter, Write},
    path::Path,
};

use log::debug;

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Replace the content of `path`, atomically where the directory allows it.
    ///
    /// Symlinks are followed, so the link stays in place and its target gets
    /// the new content. The target must already be writable: a read-only file
    /// is reported as `PermissionDenied` even when its directory would allow
    /// the rename. The replacement inherits the original file's permissions.
    /// When no temp file can be created next to the target, the file is
    /// overwritten in place instead.
    pub fn atomic_write<P: AsRef<Path>>(path: P, data: &[u8]) -> io::Result<()> {
        let target = fs::canonicalize(path.as_ref())?;
        let parent = target.parent().ok_or_else(|| io::Error::other("path has no parent"))?;

        let file = OpenOptions::new().write(true).open(&target)?;
        let permissions = file.metadata()?.permissions();
        drop(file);

        // PID + current time nanos keeps the temp name unique without a retry loop.
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

        let tmp_file = match OpenOptions::new().write(true).create_new(true).open(&tmp) {
            Ok(file) => file,
            Err(err) => {
                debug!("cannot create {} ({err}), overwriting in place", tmp.display());
                return Self::overwrite(&target, data);
            }
        };

        let result = Self::write_and_rename(tmp_file, &tmp, &target, data, permissions);
        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        result?;

        // Sync the parent directory so the rename survives a crash on Unix.
        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }

    fn write_and_rename(
        file: File,
        tmp: &Path,
        target: &Path,
        data: &[u8],
        permissions: fs::Permissions,
    ) -> io::Result<()> {
        let mut w = BufWriter::new(file);
        w.write_all(data)?;
        w.flush()?;
        let _ = w.get_ref().sync_all();
        drop(w);

        fs::set_permissions(tmp, permissions)?;
        fs::rename(tmp, target)
    }

    fn overwrite(target: &Path, data: &[u8]) -> io::Result<()> {
        let mut file = OpenOptions::new().write(true).truncate(true).open(target)?;
        file.write_all(data)?;
        file.sync_all()
    }
}
