#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod model;

pub use config::{BumpRule, DeclarationPattern};
pub use model::{Rewrite, VersionDeclaration};
