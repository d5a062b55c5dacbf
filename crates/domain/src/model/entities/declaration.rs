use std::ops::Range;

use header_bump_shared_kernel::{ConstantName, VersionValue};

/// The single `NAME<whitespace>DIGITS` occurrence a bump targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionDeclaration {
    pub name: ConstantName,
    /// Separator between name and value, kept verbatim.
    pub whitespace: String,
    pub value: VersionValue,
    /// Byte range of the whole match inside the scanned content.
    pub span: Range<usize>,
}

impl VersionDeclaration {
    /// Bytes of the declaration carrying `value` instead of the current one.
    pub fn render_with(&self, value: VersionValue) -> Vec<u8> {
        format!("{}{}{}", self.name, self.whitespace, value).into_bytes()
    }
}
