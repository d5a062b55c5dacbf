use header_bump_ports::filesystem::FileStore;
use header_bump_shared_kernel::{ErrorContext, Result};
use log::{debug, info};

use crate::dto::{BumpOutcome, BumpRequest};

/// Reads a file, increments its version declaration and writes it back.
///
/// Nothing is written unless the whole bump succeeds in memory first.
pub struct BumpVersion<'a> {
    store: &'a dyn FileStore,
}

impl<'a> BumpVersion<'a> {
    pub fn new(store: &'a dyn FileStore) -> Self {
        Self { store }
    }

    pub fn run(&self, request: &BumpRequest) -> Result<BumpOutcome> {
        let content = self.store.read(&request.path)?;
        let rewrite = request.rule.apply(&content).with_context(|| request.path.to_string())?;
        debug!(
            "{} declared at bytes {:?} of {}",
            request.rule.name(),
            rewrite.declaration.span,
            request.path
        );

        let written = if request.dry_run {
            info!("dry run: leaving {} untouched", request.path);
            false
        } else {
            self.store.replace(&request.path, &rewrite.content)?;
            true
        };

        Ok(BumpOutcome {
            path: request.path.clone(),
            name: request.rule.name().clone(),
            previous: rewrite.previous(),
            current: rewrite.next,
            written,
        })
    }
}
