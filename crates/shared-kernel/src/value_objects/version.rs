// crates/shared-kernel/src/value_objects/version.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Non-negative integer carried by a version declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionValue(u64);

impl VersionValue {
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Next value, or `None` when the increment would overflow.
    #[inline]
    pub const fn checked_next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl fmt::Display for VersionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Upper bound a value must stay below before it may be incremented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ceiling(u64);

impl Ceiling {
    #[inline]
    pub const fn new(max: u64) -> Self {
        Self(max)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// A value at or beyond the ceiling must not be incremented.
    #[inline]
    pub const fn permits(self, current: VersionValue) -> bool {
        current.0 < self.0
    }
}

impl fmt::Display for Ceiling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
