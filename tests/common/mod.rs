// tests/common/mod.rs
//! Shared helpers for the binary tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::Command;
use tempfile::TempDir;

pub const REACH_VERSION_H: &str = include_str!("../fixtures/reach_version.h");

/// Scratch directory holding one header file.
pub struct Workspace {
    dir: TempDir,
    file: PathBuf,
}

impl Workspace {
    pub fn with_header(contents: &str) -> Self {
        Self::with_bytes(contents.as_bytes())
    }

    pub fn with_bytes(contents: &[u8]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("reach_version.h");
        fs::write(&file, contents).unwrap();
        Self { dir, file }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn missing(&self) -> PathBuf {
        self.dir.path().join("missing.h")
    }

    pub fn contents(&self) -> String {
        fs::read_to_string(&self.file).unwrap()
    }

    pub fn bytes(&self) -> Vec<u8> {
        fs::read(&self.file).unwrap()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

pub fn bump() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bump"));
    cmd.env_remove("RUST_LOG");
    cmd
}
