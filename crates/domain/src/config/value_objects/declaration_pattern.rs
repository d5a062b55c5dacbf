use std::ops::Range;

use header_bump_shared_kernel::{ConstantName, DomainError, DomainResult, VersionValue};
use regex::bytes::Regex;

use crate::model::VersionDeclaration;

/// Compiled matcher for `NAME<whitespace>DIGITS` declarations of one constant.
///
/// Matching runs on raw bytes, so headers in any ASCII-compatible encoding
/// are accepted. The name must start on an identifier boundary and the digit
/// run must not run into an identifier character or a `.`, so
/// `MY_BUILD_VERSION 3`, `BUILD_VERSION 7u` and `BUILD_VERSION 2.5` are not
/// declarations.
#[derive(Debug, Clone)]
pub struct DeclarationPattern {
    name: ConstantName,
    regex: Regex,
}

/// Byte ranges of one candidate match: whole, separator, digits.
type Candidate = (Range<usize>, Range<usize>, Range<usize>);

impl DeclarationPattern {
    pub fn new(name: ConstantName) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!(r"\b{}(\s+)([0-9]+)", regex::escape(name.as_str())))?;
        Ok(Self { name, regex })
    }

    pub fn name(&self) -> &ConstantName {
        &self.name
    }

    /// The unique declaration in `content`.
    pub fn find_unique(&self, content: &[u8]) -> DomainResult<VersionDeclaration> {
        let mut found = self.candidates(content);
        match found.len() {
            0 => Err(DomainError::DeclarationNotFound { name: self.name.to_string() }),
            1 => {
                let (span, whitespace, digits) = found.remove(0);
                self.declaration(&content[whitespace], &content[digits], span)
            }
            count => Err(DomainError::AmbiguousDeclaration { name: self.name.to_string(), count }),
        }
    }

    fn candidates(&self, content: &[u8]) -> Vec<Candidate> {
        self.regex
            .captures_iter(content)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                if !Self::ends_cleanly(&content[whole.end()..]) {
                    return None;
                }
                Some((whole.range(), caps.get(1)?.range(), caps.get(2)?.range()))
            })
            .collect()
    }

    fn declaration(
        &self,
        whitespace: &[u8],
        digits: &[u8],
        span: Range<usize>,
    ) -> DomainResult<VersionDeclaration> {
        // Digits are ASCII and `\s` only matches UTF-8 encoded whitespace.
        let digits = String::from_utf8_lossy(digits);
        let value = digits.parse::<u64>().map_err(|_| DomainError::ValueOverflow {
            name: self.name.to_string(),
            digits: digits.to_string(),
        })?;
        Ok(VersionDeclaration {
            name: self.name.clone(),
            whitespace: String::from_utf8_lossy(whitespace).into_owned(),
            value: VersionValue::new(value),
            span,
        })
    }

    /// Whether the bytes following a match leave the digit run complete.
    /// Bytes that do not decode are never identifier characters.
    fn ends_cleanly(rest: &[u8]) -> bool {
        rest.utf8_chunks()
            .next()
            .and_then(|chunk| chunk.valid().chars().next())
            .is_none_or(|c| !(c.is_alphanumeric() || c == '_' || c == '.'))
    }
}
