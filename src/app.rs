// src/app.rs
use header_bump_infra::FsFileStore;
use header_bump_shared_kernel::Result;
use header_bump_usecase::{BumpOutcome, BumpRequest, BumpVersion};
use log::info;

use crate::config::Config;

/// Run one bump against the real filesystem.
pub fn execute(config: &Config) -> Result<BumpOutcome> {
    let store = FsFileStore::new();
    let request = BumpRequest {
        path: config.path.clone(),
        rule: config.rule.clone(),
        dry_run: config.dry_run,
    };
    info!(
        "bumping {} in {} (ceiling: {})",
        config.rule.name(),
        config.path,
        config.rule.ceiling().map_or_else(|| "none".to_string(), |c| c.to_string())
    );
    BumpVersion::new(&store).run(&request)
}
