// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod output;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit status when some entries were skipped.
pub const EXIT_PARTIAL: u8 = 1;
/// Exit status for fatal errors (bad arguments, unusable root).
pub const EXIT_FATAL: u8 = 2;
