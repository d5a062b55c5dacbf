pub mod declaration;
pub mod rewrite;

pub use declaration::VersionDeclaration;
pub use rewrite::Rewrite;
