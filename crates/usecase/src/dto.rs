use header_bump_domain::BumpRule;
use header_bump_shared_kernel::{ConstantName, FilePath, VersionValue};
use serde::Serialize;

/// Input of a single bump.
#[derive(Debug, Clone)]
pub struct BumpRequest {
    pub path: FilePath,
    pub rule: BumpRule,
    /// Compute the outcome without writing the file.
    pub dry_run: bool,
}

/// What a bump did (or would have done, for a dry run).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BumpOutcome {
    pub path: FilePath,
    pub name: ConstantName,
    pub previous: VersionValue,
    pub current: VersionValue,
    pub written: bool,
}
