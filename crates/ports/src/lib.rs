//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: recursive enumeration of matching files
//! - [`root`]: locating and entering the directory to scan
//!
//! These ports keep the use case independent of the concrete walker.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod root;
