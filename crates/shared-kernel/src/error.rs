// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum BumpError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<BumpError>,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error(transparent)]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, BumpError>;

/// Coarse failure classes reported to the invoking process.
///
/// Every error maps onto exactly one category; the CLI turns the category
/// into a profile-specific exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Usage,
    FileAccess,
    NotFound,
    Ambiguous,
    LimitExceeded,
}

impl BumpError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Context { source, .. } => source.category(),
            Self::Domain(err) => err.category(),
            Self::Infrastructure(_) => ErrorCategory::FileAccess,
            Self::Presentation(_) => ErrorCategory::Usage,
        }
    }
}

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{name} not found in the file")]
    DeclarationNotFound { name: String },

    #[error("found {count} matches for {name}; expected exactly one")]
    AmbiguousDeclaration { name: String, count: usize },

    #[error("cannot increment {name} beyond {ceiling} (current value {value})")]
    LimitExceeded { name: String, value: u64, ceiling: u64 },

    #[error("value of {name} ({digits}) does not fit in 64 bits")]
    ValueOverflow { name: String, digits: String },

    #[error("invalid constant name '{name}': {reason}")]
    InvalidConstantName { name: String, reason: String },
}

impl DomainError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DeclarationNotFound { .. } => ErrorCategory::NotFound,
            Self::AmbiguousDeclaration { .. } => ErrorCategory::Ambiguous,
            Self::LimitExceeded { .. } | Self::ValueOverflow { .. } => ErrorCategory::LimitExceeded,
            Self::InvalidConstantName { .. } => ErrorCategory::Usage,
        }
    }
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("failed to access '{path}' for reading: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to access '{path}' for writing: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("'bump' needs an argument of the file to be parsed")]
    MissingArgument,
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<BumpError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| BumpError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| BumpError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
