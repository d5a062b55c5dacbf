use header_bump_shared_kernel::VersionValue;

use super::declaration::VersionDeclaration;

/// Result of applying a bump to file content, before anything is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub declaration: VersionDeclaration,
    pub next: VersionValue,
    pub content: Vec<u8>,
}

impl Rewrite {
    pub fn previous(&self) -> VersionValue {
        self.declaration.value
    }
}
