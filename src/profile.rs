// src/profile.rs
//! Compiled-in bump variants.
//!
//! Each profile fixes the constant it targets, its ceiling and the exit
//! statuses it reports. Codes are not shared between profiles.

use std::{ffi::OsString, process::ExitCode};

use clap::ValueEnum;
use header_bump_shared_kernel::ErrorCategory;

/// Exit status per failure category. Success is always `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCodes {
    pub usage: u8,
    pub file_access: u8,
    pub not_found: u8,
    pub ambiguous: u8,
    pub limit_exceeded: u8,
}

impl ExitCodes {
    pub const fn for_category(&self, category: ErrorCategory) -> u8 {
        match category {
            ErrorCategory::Usage => self.usage,
            ErrorCategory::FileAccess => self.file_access,
            ErrorCategory::NotFound => self.not_found,
            ErrorCategory::Ambiguous => self.ambiguous,
            ErrorCategory::LimitExceeded => self.limit_exceeded,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BumpProfile {
    pub constant: &'static str,
    pub ceiling: Option<u64>,
    pub exit_codes: ExitCodes,
}

/// Build number of the header; an 8-bit field, hence the ceiling.
///
/// Codes are the two's complement bytes of -1, -2, -3, -4, -5.
pub const BUILD: BumpProfile = BumpProfile {
    constant: "BUILD_VERSION",
    ceiling: Some(255),
    exit_codes: ExitCodes {
        usage: 255,
        ambiguous: 254,
        limit_exceeded: 253,
        file_access: 252,
        not_found: 251,
    },
};

pub const PATCH: BumpProfile = BumpProfile {
    constant: "REACH_C_PATCH_VERSION",
    ceiling: None,
    exit_codes: ExitCodes {
        usage: 1,
        file_access: 2,
        not_found: 3,
        ambiguous: 4,
        limit_exceeded: 5,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileId {
    #[default]
    Build,
    Patch,
}

impl ProfileId {
    pub const fn profile(self) -> &'static BumpProfile {
        match self {
            Self::Build => &BUILD,
            Self::Patch => &PATCH,
        }
    }

    pub fn exit_code(self, category: ErrorCategory) -> ExitCode {
        ExitCode::from(self.profile().exit_codes.for_category(category))
    }

    /// Best-effort `--profile` lookup for when argument parsing itself failed.
    pub fn sniff(args: &[OsString]) -> Self {
        let mut iter = args.iter().skip(1).filter_map(|a| a.to_str());
        while let Some(arg) = iter.next() {
            let value = match arg.strip_prefix("--profile") {
                Some("") => iter.next(),
                Some(rest) => rest.strip_prefix('='),
                None => continue,
            };
            if let Some(id) = value.and_then(|v| Self::from_str(v, true).ok()) {
                return id;
            }
        }
        Self::default()
    }
}
