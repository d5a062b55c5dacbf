use header_bump_shared_kernel::{Ceiling, ConstantName, DomainError, DomainResult};

use crate::config::value_objects::DeclarationPattern;
use crate::model::Rewrite;

/// Which constant to bump and how far it may go.
#[derive(Debug, Clone)]
pub struct BumpRule {
    pattern: DeclarationPattern,
    ceiling: Option<Ceiling>,
}

impl BumpRule {
    pub fn new(name: ConstantName, ceiling: Option<Ceiling>) -> DomainResult<Self> {
        let pattern = DeclarationPattern::new(name.clone()).map_err(|e| {
            DomainError::InvalidConstantName { name: name.to_string(), reason: e.to_string() }
        })?;
        Ok(Self { pattern, ceiling })
    }

    pub fn name(&self) -> &ConstantName {
        self.pattern.name()
    }

    pub fn ceiling(&self) -> Option<Ceiling> {
        self.ceiling
    }

    /// Increment the unique declaration in `content` by one.
    ///
    /// Every byte outside the declaration's value is carried over untouched,
    /// whatever the file's encoding.
    pub fn apply(&self, content: &[u8]) -> DomainResult<Rewrite> {
        let declaration = self.pattern.find_unique(content)?;
        let current = declaration.value;

        if let Some(ceiling) = self.ceiling.filter(|c| !c.permits(current)) {
            return Err(DomainError::LimitExceeded {
                name: self.name().to_string(),
                value: current.value(),
                ceiling: ceiling.value(),
            });
        }

        let next = current.checked_next().ok_or_else(|| DomainError::LimitExceeded {
            name: self.name().to_string(),
            value: current.value(),
            ceiling: u64::MAX,
        })?;

        let span = declaration.span.clone();
        let mut rewritten = Vec::with_capacity(content.len() + 1);
        rewritten.extend_from_slice(&content[..span.start]);
        rewritten.extend_from_slice(&declaration.render_with(next));
        rewritten.extend_from_slice(&content[span.end..]);

        Ok(Rewrite { declaration, next, content: rewritten })
    }
}
