// crates/shared-kernel/src/value_objects/mod.rs
pub mod constant;
pub mod file_info;
pub mod version;

pub use constant::ConstantName;
pub use file_info::FilePath;
pub use version::{Ceiling, VersionValue};
