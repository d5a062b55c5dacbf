//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: read, bump and persist a version declaration
//! - [`dto`]: data transfer objects for the use case boundary
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{BumpOutcome, BumpRequest};
pub use orchestrator::BumpVersion;
