pub mod entities;

pub use entities::{Rewrite, VersionDeclaration};
