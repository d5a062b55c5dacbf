//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: whole-file byte access for the header being bumped
//!
//! The use case layer talks to storage only through these traits, which
//! keeps it testable with in-memory stubs.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
