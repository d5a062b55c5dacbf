// crates/shared-kernel/src/value_objects/constant.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Identifier of the constant whose value gets bumped, e.g. `BUILD_VERSION`.
///
/// Only C-style identifiers are accepted so the name can be embedded in a
/// pattern without escaping surprises and matched on identifier boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ConstantName(String);

impl ConstantName {
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        let mut chars = name.chars();
        let reason = match chars.next() {
            None => Some("name is empty"),
            Some(c) if !(c.is_ascii_alphabetic() || c == '_') => {
                Some("must start with an ASCII letter or underscore")
            }
            Some(_) if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') => {
                Some("may only contain ASCII letters, digits and underscores")
            }
            Some(_) => None,
        };
        match reason {
            Some(reason) => Err(DomainError::InvalidConstantName { name, reason: reason.to_string() }),
            None => Ok(Self(name)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ConstantName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ConstantName> for String {
    fn from(name: ConstantName) -> Self {
        name.0
    }
}

impl fmt::Display for ConstantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
