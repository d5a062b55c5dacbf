// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    BumpError, DomainError, DomainResult, ErrorCategory, ErrorContext, InfrastructureError,
    PresentationError, Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{Ceiling, ConstantName, FilePath, VersionValue};
